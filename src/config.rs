use crate::cli::Cli;
use crate::common::{ExistingRulePolicy, normalize_country_code};
use crate::constants::{
    DEFAULT_COUNTRIES, DEFAULT_GCLOUD, DEFAULT_NETWORK, DEFAULT_PRIORITY, DEFAULT_SOURCE_URL,
};
use crate::error::AppError;
use crate::sink::GcloudRuleSink;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 実行時設定。JSONファイルとCLI引数から組み立てる。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub countries: Vec<String>,
    pub network: String,
    pub priority: u32,
    pub project: Option<String>,
    pub source_url: String,
    pub on_existing: ExistingRulePolicy,
    pub save_lists: Option<PathBuf>,
    pub gcloud: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            countries: DEFAULT_COUNTRIES.iter().map(|s| s.to_string()).collect(),
            network: DEFAULT_NETWORK.to_string(),
            priority: DEFAULT_PRIORITY,
            project: None,
            source_url: DEFAULT_SOURCE_URL.to_string(),
            on_existing: ExistingRulePolicy::default(),
            save_lists: None,
            gcloud: DEFAULT_GCLOUD.to_string(),
        }
    }
}

impl Config {
    /// JSON設定ファイルを読み込む
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path).await?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, AppError> {
        let config: Config = serde_json::from_str(contents)?;
        config.normalized()
    }

    /// 設定ファイル(指定があれば)を土台に、明示されたCLI引数で上書きする
    pub async fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path).await?,
            None => Self::default(),
        };

        if let Some(codes) = &cli.country_codes {
            config.countries = codes.clone();
        }
        if let Some(network) = &cli.network {
            config.network = network.clone();
        }
        if let Some(priority) = cli.priority {
            config.priority = priority;
        }
        if let Some(project) = &cli.project {
            config.project = Some(project.clone());
        }
        if let Some(url) = &cli.source_url {
            config.source_url = url.clone();
        }
        if let Some(policy) = cli.on_existing {
            config.on_existing = policy;
        }
        if let Some(dir) = &cli.save_lists {
            config.save_lists = Some(dir.clone());
        }
        if let Some(gcloud) = &cli.gcloud {
            config.gcloud = gcloud.clone();
        }

        config.normalized()
    }

    /// 国コードの大文字化と検証。重複は最初の出現のみ残す。
    fn normalized(mut self) -> Result<Self, AppError> {
        let mut codes: Vec<String> = Vec::with_capacity(self.countries.len());
        for raw in &self.countries {
            let code = normalize_country_code(raw).ok_or_else(|| {
                AppError::InvalidInput(format!("'{}' is not a two-letter country code", raw))
            })?;
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        if codes.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one country code is required".into(),
            ));
        }
        if self.network.trim().is_empty() {
            return Err(AppError::InvalidInput("network must not be empty".into()));
        }
        self.countries = codes;
        Ok(self)
    }

    pub fn rule_sink(&self) -> GcloudRuleSink {
        GcloudRuleSink {
            program: self.gcloud.clone(),
            network: self.network.clone(),
            priority: self.priority,
            project: self.project.clone(),
            policy: self.on_existing,
            out: io::stdout(),
        }
    }
}
