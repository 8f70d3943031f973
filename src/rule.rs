use crate::constants::RULE_NAME_PREFIX;
use std::fmt;

/// ファイアウォールルール名 (`allow-jp-00` 形式)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleName(String);

impl RuleName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 国コードとチャンク番号からルール名を作る。
/// 番号は2桁ゼロ埋め、100以上はそのまま桁が増える。
pub fn rule_name(country_code: &str, index: usize) -> RuleName {
    RuleName(format!(
        "{}-{}-{:02}",
        RULE_NAME_PREFIX,
        country_code.to_lowercase(),
        index
    ))
}

/// 外部のルール作成処理へ渡す1件分の要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRequest {
    pub name: RuleName,
    pub addresses: Vec<String>,
}

impl RuleRequest {
    pub fn new(name: RuleName, addresses: Vec<String>) -> Self {
        Self { name, addresses }
    }

    /// `--source-ranges` に渡すカンマ区切り文字列
    pub fn source_ranges(&self) -> String {
        self.addresses.join(",")
    }
}
