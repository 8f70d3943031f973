use crate::error::AppError;
use crate::fetch::source_url;
use crate::output_common::{make_header, write_list_txt};
use crate::process::{ChunkStatus, CountryAddressMap, RunSummary};
use chrono::Local;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 取得したアドレス一覧を国ごとに `ipv4_cidr_<cc>.txt` として保存する。
/// 処理本体はこのファイルを読み戻さない。
pub async fn write_address_snapshots(
    dir: &Path,
    addresses: &CountryAddressMap,
    url_template: &str,
) -> Result<Vec<PathBuf>, AppError> {
    fs::create_dir_all(dir).await?;
    let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut written = Vec::with_capacity(addresses.len());
    for (country_code, list) in addresses.iter() {
        let path = dir.join(format!("ipv4_cidr_{}.txt", country_code.to_lowercase()));
        let header = make_header(
            &now_str,
            country_code,
            &source_url(url_template, country_code),
            list.len(),
        );
        write_list_txt(&path, list, &header).await?;
        println!("[output] Wrote {} entries to {}", list.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

/// 実行結果のサマリーを文字列にする
pub fn format_summary(summary: &RunSummary, dry_run: bool) -> String {
    let mut out = String::new();
    let mode = if dry_run { " (dry-run)" } else { "" };
    let _ = writeln!(out, "[summary]{} {} rules", mode, summary.total_rules());

    for country in &summary.countries {
        let _ = writeln!(
            out,
            "  {}: created={} kept={} failed={} addresses={} invalid={}",
            country.country_code,
            country.created(),
            country.kept(),
            country.failed(),
            country.accepted(),
            country.rejected()
        );
        for chunk in &country.chunks {
            if let ChunkStatus::Failed(reason) = &chunk.status {
                let _ = writeln!(out, "    {} failed: {}", chunk.name, reason);
            }
        }
    }
    out
}

pub fn print_summary(summary: &RunSummary, dry_run: bool) {
    print!("{}", format_summary(summary, dry_run));
}
