use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractAnalyzerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("ファイルが選択されていません")]
    NoFileSelected,

    #[error(transparent)]
    Widget(#[from] contract_analyzer_common::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ContractAnalyzerError>;
