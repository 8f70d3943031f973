use crate::chunk::Chunks;
use crate::error::AppError;
use crate::fetch::AddressSource;
use crate::rule::{RuleName, RuleRequest, rule_name};
use crate::sink::{RuleSink, SinkStatus};
use crate::validate::check_addresses;
use indexmap::IndexMap;
use log::{error, info};

/// 国コード → アドレス一覧。挿入順 (設定された国コードの順) を保持する。
pub type CountryAddressMap = IndexMap<String, Vec<String>>;

/// 国コードごとにAddressSourceから一覧を取得する。
/// 取得失敗はそのまま呼び出し元へ返し、処理全体を中断する。
pub async fn collect_addresses<A: AddressSource>(
    source: &A,
    country_codes: &[String],
) -> Result<CountryAddressMap, AppError> {
    let mut map = CountryAddressMap::with_capacity(country_codes.len());
    for code in country_codes {
        let addresses = source.fetch_addresses(code).await?;
        map.insert(code.clone(), addresses);
    }
    Ok(map)
}

/// 1チャンク分のルール作成結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkStatus {
    Created,
    Kept,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkReport {
    pub name: RuleName,
    pub accepted: usize,
    pub rejected: usize,
    pub status: ChunkStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySummary {
    pub country_code: String,
    pub chunks: Vec<ChunkReport>,
}

impl CountrySummary {
    pub fn created(&self) -> usize {
        self.count(|s| matches!(s, ChunkStatus::Created))
    }

    pub fn kept(&self) -> usize {
        self.count(|s| matches!(s, ChunkStatus::Kept))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ChunkStatus::Failed(_)))
    }

    /// 検証で落としたアドレスの合計
    pub fn rejected(&self) -> usize {
        self.chunks.iter().map(|c| c.rejected).sum()
    }

    pub fn accepted(&self) -> usize {
        self.chunks.iter().map(|c| c.accepted).sum()
    }

    fn count(&self, pred: impl Fn(&ChunkStatus) -> bool) -> usize {
        self.chunks.iter().filter(|c| pred(&c.status)).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub countries: Vec<CountrySummary>,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.countries.iter().any(|c| c.failed() > 0)
    }

    pub fn total_rules(&self) -> usize {
        self.countries.iter().map(|c| c.chunks.len()).sum()
    }
}

/// 1か国分のルールをチャンク単位で作成する。
/// チャンク0から順に、空のチャンクが出たところで終了する。
pub async fn create_rules_for_country<S: RuleSink>(
    sink: &mut S,
    country_code: &str,
    addresses: &[String],
    dry_run: bool,
) -> CountrySummary {
    let mut summary = CountrySummary {
        country_code: country_code.to_string(),
        chunks: Vec::new(),
    };

    for (n, chunk) in Chunks::new(addresses) {
        let validated = check_addresses(chunk);
        let name = rule_name(country_code, n);
        let accepted = validated.accepted.len();
        let rejected = validated.rejected.len();
        let request = RuleRequest::new(name.clone(), validated.accepted);

        let status = match sink.create_rule(&request, dry_run).await {
            Ok(SinkStatus::Created) => ChunkStatus::Created,
            Ok(SinkStatus::Kept) => ChunkStatus::Kept,
            Err(e) => {
                error!("failed to create rule {}: {}", name, e);
                ChunkStatus::Failed(e.to_string())
            }
        };

        summary.chunks.push(ChunkReport {
            name,
            accepted,
            rejected,
            status,
        });
    }

    info!(
        "{}: {} rules ({} created, {} kept, {} failed), {} invalid addresses skipped",
        country_code,
        summary.chunks.len(),
        summary.created(),
        summary.kept(),
        summary.failed(),
        summary.rejected()
    );
    summary
}

/// ファイアウォールルールを国コードの順にまとめて作成する。
/// `dry_run` は解釈せずそのままRuleSinkへ渡す。
pub async fn create_rules<S: RuleSink>(
    sink: &mut S,
    addresses: &CountryAddressMap,
    dry_run: bool,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for (country_code, list) in addresses {
        let country = create_rules_for_country(sink, country_code, list, dry_run).await;
        summary.countries.push(country);
    }
    summary
}
