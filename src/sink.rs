use crate::common::ExistingRulePolicy;
use crate::constants::{ALLOWED_RULES, DEFAULT_GCLOUD, DEFAULT_NETWORK, DEFAULT_PRIORITY};
use crate::error::AppError;
use crate::rule::{RuleName, RuleRequest};
use log::{debug, info, warn};
use std::io::{self, Stdout, Write};
use std::process::Stdio;
use tokio::process::Command;

/// ルール作成の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkStatus {
    /// 作成した (ドライラン時も含む)
    Created,
    /// 既存ルールをそのまま残した
    Kept,
}

/// ルール要求を受け取り、実際にファイアウォールルールを作る側。
/// `dry_run` の解釈は実装側の責任。
#[allow(async_fn_in_trait)]
pub trait RuleSink {
    async fn create_rule(
        &mut self,
        request: &RuleRequest,
        dry_run: bool,
    ) -> Result<SinkStatus, AppError>;
}

/// gcloud CLIでGCPのファイアウォールルールを作成する。
/// ドライラン時のコマンド表示は `out` に書き出す (既定は標準出力)。
#[derive(Debug)]
pub struct GcloudRuleSink<W = Stdout> {
    pub program: String,
    pub network: String,
    pub priority: u32,
    pub project: Option<String>,
    pub policy: ExistingRulePolicy,
    pub out: W,
}

impl Default for GcloudRuleSink {
    fn default() -> Self {
        Self {
            program: DEFAULT_GCLOUD.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            priority: DEFAULT_PRIORITY,
            project: None,
            policy: ExistingRulePolicy::default(),
            out: io::stdout(),
        }
    }
}

impl<W: Write> GcloudRuleSink<W> {
    /// ドライラン出力先を差し替える
    pub fn with_output<O: Write>(self, out: O) -> GcloudRuleSink<O> {
        GcloudRuleSink {
            program: self.program,
            network: self.network,
            priority: self.priority,
            project: self.project,
            policy: self.policy,
            out,
        }
    }

    /// `gcloud compute firewall-rules create ...` の引数 (プログラム名を除く)
    pub fn create_args(&self, request: &RuleRequest) -> Vec<String> {
        let mut args = vec![
            "compute".to_string(),
            "firewall-rules".to_string(),
            "create".to_string(),
            request.name.to_string(),
            "--action=ALLOW".to_string(),
            format!("--rules={}", ALLOWED_RULES),
            "--direction=INGRESS".to_string(),
            format!("--network={}", self.network),
            format!("--priority={}", self.priority),
            "--no-enable-logging".to_string(),
            format!("--source-ranges={}", request.source_ranges()),
        ];
        self.push_project(&mut args);
        args
    }

    /// ドライラン時に表示するコマンドライン
    pub fn describe(&self, request: &RuleRequest) -> String {
        let mut line = self.program.clone();
        for arg in self.create_args(request) {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }

    fn push_project(&self, args: &mut Vec<String>) {
        if let Some(project) = &self.project {
            args.push(format!("--project={}", project));
        }
    }

    fn name_args(&self, verb: &str, name: &RuleName) -> Vec<String> {
        let mut args = vec![
            "compute".to_string(),
            "firewall-rules".to_string(),
            verb.to_string(),
            name.to_string(),
        ];
        if verb == "delete" {
            args.push("--quiet".to_string());
        }
        self.push_project(&mut args);
        args
    }

    /// 同名のルールが存在するか (describe が成功すれば存在)
    async fn rule_exists(&self, name: &RuleName) -> Result<bool, AppError> {
        let status = Command::new(&self.program)
            .args(self.name_args("describe", name))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        Ok(status.success())
    }

    async fn run(&self, args: Vec<String>) -> Result<(), AppError> {
        debug!("run({} {})", self.program, args.join(" "));
        let output = Command::new(&self.program).args(&args).output().await?;
        if !output.status.success() {
            return Err(AppError::Command {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        debug!("{}", String::from_utf8_lossy(&output.stdout).trim());
        Ok(())
    }
}

impl<W: Write> RuleSink for GcloudRuleSink<W> {
    async fn create_rule(
        &mut self,
        request: &RuleRequest,
        dry_run: bool,
    ) -> Result<SinkStatus, AppError> {
        if dry_run {
            if request.addresses.is_empty() {
                warn!("rule {} has no valid source ranges", request.name);
            }
            let line = self.describe(request);
            writeln!(self.out, "Run: {}", line)?;
            self.out.flush()?;
            return Ok(SinkStatus::Created);
        }

        if request.addresses.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "rule {} has no valid source ranges",
                request.name
            )));
        }

        if self.rule_exists(&request.name).await? {
            match self.policy {
                ExistingRulePolicy::Fail => {
                    return Err(AppError::Other(format!(
                        "rule {} already exists",
                        request.name
                    )));
                }
                ExistingRulePolicy::Skip => {
                    warn!("rule {} already exists, kept as is", request.name);
                    return Ok(SinkStatus::Kept);
                }
                ExistingRulePolicy::Replace => {
                    info!("rule {} already exists, replacing", request.name);
                    self.run(self.name_args("delete", &request.name)).await?;
                }
            }
        }

        self.run(self.create_args(request)).await?;
        info!(
            "created {} ({} source ranges)",
            request.name,
            request.addresses.len()
        );
        Ok(SinkStatus::Created)
    }
}
