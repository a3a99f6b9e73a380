use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoStatusError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("日付の形式が不正です（YYYYMMDD または YYYY-MM-DD）: {0}")]
    InvalidDate(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_status_common::Error),
}

pub type Result<T> = std::result::Result<T, PhotoStatusError>;
