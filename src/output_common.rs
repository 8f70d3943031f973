use crate::error::AppError;
use std::path::Path;
use tokio::fs;

/// スナップショットファイルのヘッダー
pub fn make_header(
    now_str: &str,
    country_code: &str,
    source_url: &str,
    entries: usize,
) -> String {
    format!(
        "# Generated at: {}\n# Country Code: {}\n# Source: {}\n# Entries: {}\n\n",
        now_str, country_code, source_url, entries
    )
}

/// ヘッダー + 1行1アドレスで書き出す (常に上書き)
pub async fn write_list_txt<P: AsRef<Path>>(
    path: P,
    addresses: &[String],
    header: &str,
) -> Result<(), AppError> {
    let body = addresses.join("\n");
    let content = format!("{}{}\n", header, body);
    fs::write(path, &content).await?;
    Ok(())
}
