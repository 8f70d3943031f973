use crate::common::ExistingRulePolicy;
use clap::Parser;
use std::path::PathBuf;

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Allow ingress on a GCP network only from the selected countries."
)]
pub struct Cli {
    #[arg(
        long = "dry-run",
        default_value = "false",
        help = "Print the gcloud commands instead of running them."
    )]
    pub dry_run: bool,

    #[arg(
        short = 'c',
        long = "country",
        num_args = 1..,
        value_parser = parse_country_code,
        help = "Country codes to allow.\nExample: jp us\ndefault: JP US"
    )]
    pub country_codes: Option<Vec<String>>,

    #[arg(long = "network", help = "VPC network the rules are attached to.\ndefault: default")]
    pub network: Option<String>,

    #[arg(long = "priority", help = "Rule priority.\ndefault: 10")]
    pub priority: Option<u32>,

    #[arg(long = "project", help = "GCP project passed to gcloud as --project.")]
    pub project: Option<String>,

    #[arg(
        long = "source-url",
        help = "URL template of the per-country address list. '{cc}' is replaced by the lowercase country code."
    )]
    pub source_url: Option<String>,

    #[arg(
        long = "on-existing",
        value_parser = clap::value_parser!(ExistingRulePolicy),
        help = "What to do when a rule with the same name exists: 'fail', 'skip' or 'replace'.\ndefault: fail"
    )]
    pub on_existing: Option<ExistingRulePolicy>,

    #[arg(
        long = "save-lists",
        help = "Directory to write a snapshot of each fetched address list to."
    )]
    pub save_lists: Option<PathBuf>,

    #[arg(long = "gcloud", help = "Path to the gcloud executable.\ndefault: gcloud")]
    pub gcloud: Option<String>,

    #[arg(long = "config", help = "JSON config file. Flags override its values.")]
    pub config: Option<PathBuf>,
}

fn parse_country_code(s: &str) -> Result<String, String> {
    crate::common::normalize_country_code(s)
        .ok_or_else(|| format!("'{}' is not a two-letter country code", s))
}
