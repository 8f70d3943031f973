use crate::error::AppError;
use log::{debug, info};
use reqwest::Client;

/// 国コードから、その国に割り当てられたアドレス一覧を取得する。
#[allow(async_fn_in_trait)]
pub trait AddressSource {
    async fn fetch_addresses(&self, country_code: &str) -> Result<Vec<String>, AppError>;
}

/// HTTP経由でゾーンファイルを取得するAddressSource
#[derive(Debug, Clone)]
pub struct HttpAddressSource {
    client: Client,
    url_template: String,
}

impl HttpAddressSource {
    pub fn new(client: Client, url_template: impl Into<String>) -> Self {
        Self {
            client,
            url_template: url_template.into(),
        }
    }

    pub fn url_for(&self, country_code: &str) -> String {
        source_url(&self.url_template, country_code)
    }
}

impl AddressSource for HttpAddressSource {
    async fn fetch_addresses(&self, country_code: &str) -> Result<Vec<String>, AppError> {
        let url = self.url_for(country_code);
        info!("fetching address list for {} from {}", country_code, url);
        let text = fetch_once(&self.client, &url).await?;
        let addresses = parse_zone_text(&text);
        debug!("{} entries for {}", addresses.len(), country_code);
        Ok(addresses)
    }
}

/// URLテンプレートの `{cc}` を小文字の国コードに置換する
pub fn source_url(template: &str, country_code: &str) -> String {
    template.replace("{cc}", &country_code.to_lowercase())
}

/// HTTP GETを1回だけ実行する。
/// 成功時はレスポンスボディを文字列として返す。
/// HTTPステータスがエラーの場合もエラーを返す。
pub async fn fetch_once(client: &Client, url: &str) -> Result<String, AppError> {
    let resp = client.get(url).send().await?.error_for_status()?;
    let text = resp.text().await?;
    Ok(text)
}

/// ゾーンファイルの本文をアドレス文字列の一覧にする。
/// `#` で始まるコメント行と空行は除外し、順序は保持する。
pub fn parse_zone_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
