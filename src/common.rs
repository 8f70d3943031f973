use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// 同名のルールが既に存在した場合の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingRulePolicy {
    /// 作成せず失敗として報告する
    #[default]
    Fail,
    /// 既存ルールを残して次へ進む
    Skip,
    /// 既存ルールを削除してから作り直す
    Replace,
}

impl FromStr for ExistingRulePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(ExistingRulePolicy::Fail),
            "skip" => Ok(ExistingRulePolicy::Skip),
            "replace" => Ok(ExistingRulePolicy::Replace),
            other => Err(format!(
                "Invalid policy '{}'. Must be 'fail', 'skip' or 'replace'",
                other
            )),
        }
    }
}

impl ExistingRulePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ExistingRulePolicy::Fail => "fail",
            ExistingRulePolicy::Skip => "skip",
            ExistingRulePolicy::Replace => "replace",
        }
    }
}

impl fmt::Display for ExistingRulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 国コードを大文字化し、英字2文字であることを確認する
pub fn normalize_country_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_uppercase())
    } else {
        None
    }
}
