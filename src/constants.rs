/// 定数の共通化

/// 1ルールあたりに含めるアドレス数
pub const CHUNK_SIZE: usize = 256;

/// 既定で許可する国コード
pub const DEFAULT_COUNTRIES: &[&str] = &["JP", "US"];

/// 国別アドレス一覧の取得元。`{cc}` は小文字の国コードに置換される。
pub const DEFAULT_SOURCE_URL: &str = "http://ipverse.net/ipblocks/data/countries/{cc}.zone";

pub const DEFAULT_NETWORK: &str = "default";
pub const DEFAULT_PRIORITY: u32 = 10;
pub const DEFAULT_GCLOUD: &str = "gcloud";

/// 許可するプロトコル/ポート (HTTP, HTTPS, ICMP, SSH)
pub const ALLOWED_RULES: &str = "tcp:80,tcp:443,icmp,tcp:22";

pub const RULE_NAME_PREFIX: &str = "allow";
