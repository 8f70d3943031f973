use crate::config::Config;
use crate::error::AppError;
use crate::fetch::{AddressSource, HttpAddressSource};
use crate::output::write_address_snapshots;
use crate::process::{RunSummary, collect_addresses, create_rules};
use crate::sink::RuleSink;
use reqwest::Client;

/// 設定された国コードのアドレスを取得し、ルールを作成する
pub async fn run_country_codes(config: &Config, dry_run: bool) -> Result<RunSummary, AppError> {
    let source = HttpAddressSource::new(Client::new(), config.source_url.clone());
    let mut sink = config.rule_sink();
    run_with(&source, &mut sink, config, dry_run).await
}

/// AddressSource / RuleSink を差し替えられる形の本体
pub async fn run_with<A: AddressSource, S: RuleSink>(
    source: &A,
    sink: &mut S,
    config: &Config,
    dry_run: bool,
) -> Result<RunSummary, AppError> {
    // 取得に失敗した場合はここで中断する
    let addresses = collect_addresses(source, &config.countries).await?;

    if let Some(dir) = &config.save_lists {
        write_address_snapshots(dir, &addresses, &config.source_url).await?;
    }

    Ok(create_rules(sink, &addresses, dry_run).await)
}
