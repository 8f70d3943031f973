use std::{io, process::ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // IOまわりのエラー (ファイル書き込み・外部コマンド起動)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ネットワーク関係のエラー (reqwest)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    // 設定ファイル(JSON)のパース失敗
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    // 特定の入力が不正だった場合など
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // 外部コマンド(gcloud)が非ゼロで終了した
    #[error("`{program}` exited with {status}: {stderr}")]
    Command {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    // その他、文字列メッセージだけを格納した汎用エラー
    #[error("{0}")]
    Other(String),
}
