use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenamerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません（またはディレクトリではありません）: {0}")]
    FolderNotFound(String),

    #[error("パターンが見つかりません: {0}。`renamer patterns` で一覧を確認してください")]
    UnknownPattern(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, RenamerError>;
