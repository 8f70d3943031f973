use clap::Parser;
use geo_allow::cli::Cli;
use geo_allow::common::ExistingRulePolicy;
use geo_allow::config::Config;

#[tokio::test]
async fn defaults_without_flags() {
    let cli = Cli::parse_from(["geo-allow"]);
    assert!(!cli.dry_run);
    assert!(cli.country_codes.is_none());

    let config = Config::from_cli(&cli)
        .await
        .unwrap_or_else(|e| panic!("config: {e}"));
    assert_eq!(config.countries, vec!["JP".to_string(), "US".to_string()]);
    assert_eq!(config.priority, 10);
    assert_eq!(config.on_existing, ExistingRulePolicy::Fail);
}

#[tokio::test]
async fn parses_dry_run_and_overrides() {
    let cli = Cli::parse_from([
        "geo-allow",
        "--dry-run",
        "-c",
        "jp",
        "de",
        "--network",
        "prod",
        "--priority",
        "100",
        "--on-existing",
        "replace",
    ]);
    assert!(cli.dry_run);
    assert_eq!(
        cli.country_codes.clone().unwrap_or_default(),
        vec!["JP".to_string(), "DE".to_string()]
    );

    let config = Config::from_cli(&cli)
        .await
        .unwrap_or_else(|e| panic!("config: {e}"));
    assert_eq!(config.network, "prod");
    assert_eq!(config.priority, 100);
    assert_eq!(config.on_existing, ExistingRulePolicy::Replace);

    let sink = config.rule_sink();
    assert_eq!(sink.network, "prod");
    assert_eq!(sink.policy, ExistingRulePolicy::Replace);
}

#[test]
fn rejects_bad_country_code_and_policy() {
    assert!(Cli::try_parse_from(["geo-allow", "-c", "japan"]).is_err());
    assert!(Cli::try_parse_from(["geo-allow", "--on-existing", "maybe"]).is_err());
}

#[tokio::test]
async fn flags_override_config_file() {
    let dir = std::path::PathBuf::from("target/test-output");
    tokio::fs::create_dir_all(&dir)
        .await
        .unwrap_or_else(|e| panic!("mkdir failed: {e}"));
    let path = dir.join(format!("cli_config_{}.json", rand::random::<u64>()));
    tokio::fs::write(&path, r#"{ "countries": ["tw"], "network": "edge", "priority": 5 }"#)
        .await
        .unwrap_or_else(|e| panic!("write failed: {e}"));

    let path_str = path.to_string_lossy().to_string();
    let cli = Cli::parse_from(["geo-allow", "--config", &path_str, "--priority", "7"]);
    let config = Config::from_cli(&cli)
        .await
        .unwrap_or_else(|e| panic!("config: {e}"));
    assert_eq!(config.countries, vec!["TW".to_string()]);
    assert_eq!(config.network, "edge");
    assert_eq!(config.priority, 7);

    let _ = tokio::fs::remove_file(&path).await;
}
