//! エラー型定義

use thiserror::Error;

/// 送信処理の失敗（ネットワーク・HTTPステータス・JSON解析）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Response parse error: {0}")]
    Parse(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// PDF以外のファイルが選択された
    #[error("Validation error: expected application/pdf, got '{mime_type}'")]
    Validation { mime_type: String },

    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation { mime_type: "image/png".to_string() };
        let display = format!("{}", error);
        assert!(display.contains("application/pdf"));
        assert!(display.contains("image/png"));
    }

    #[test]
    fn test_error_display_status() {
        let error: Error = TransferError::Status(500).into();
        assert_eq!(format!("{}", error), "HTTP error! status: 500");
        assert!(matches!(error, Error::Transfer(TransferError::Status(500))));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("ポート番号が不正です".to_string());
        assert_eq!(format!("{}", error), "Config error: ポート番号が不正です");
    }
}
