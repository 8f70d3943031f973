use clap::Parser;
use env_logger::Env;
use geo_allow::{
    cli::Cli, commands::handle_country_codes::run_country_codes, config::Config,
    error::AppError, output::print_summary,
};
use log::{error, info};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// アプリケーションのメインロジック。
/// 失敗したルールが1つでもあれば false を返す。
async fn run(args: Cli) -> Result<bool, AppError> {
    let config = Config::from_cli(&args).await?;
    info!(
        "countries={} network={} dry_run={}",
        config.countries.join(","),
        config.network,
        args.dry_run
    );

    let summary = run_country_codes(&config, args.dry_run).await?;
    print_summary(&summary, args.dry_run);

    Ok(!summary.has_failures())
}
