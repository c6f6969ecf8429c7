//! 接続先設定・アップロードポリシー

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 解析エンドポイントのパス（api_prefix以降）
pub const ANALYZE_PATH: &str = "/contracts/analyze";

/// multipartのファイルフィールド名
pub const FILE_FIELD: &str = "file";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// 送信中に別のファイルが投入された場合の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPolicy {
    /// 送信中は入力を無視する（入力欄も無効化）
    #[default]
    RejectWhileBusy,
    /// 重複送信を許可する。完了のたびにローディング表示を消し、最後に完了した結果が残る
    AllowOverlap,
}

impl std::str::FromStr for UploadPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" | "reject_while_busy" => Ok(UploadPolicy::RejectWhileBusy),
            "overlap" | "allow_overlap" => Ok(UploadPolicy::AllowOverlap),
            _ => Err(format!("Unknown policy: {}. Use reject or overlap", s)),
        }
    }
}

/// クライアント設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub api_prefix: String,
    pub policy: UploadPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: "http".into(),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            api_prefix: DEFAULT_API_PREFIX.into(),
            policy: UploadPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// ホストのみ指定した設定
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// 解析エンドポイントのURL
    pub fn analyze_url(&self) -> String {
        format!(
            "{}://{}:{}{}{}",
            self.scheme,
            self.host,
            self.port,
            self.api_prefix.trim_end_matches('/'),
            ANALYZE_PATH
        )
    }

    /// 設定値の検証
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("host is empty".into()));
        }
        if self.host.contains('/') || self.host.contains(' ') {
            return Err(Error::Config(format!("invalid host: {}", self.host)));
        }
        if self.port == 0 {
            return Err(Error::Config("port must be non-zero".into()));
        }
        if self.scheme != "http" && self.scheme != "https" {
            return Err(Error::Config(format!("unsupported scheme: {}", self.scheme)));
        }
        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(Error::Config(format!("api_prefix must start with '/': {}", self.api_prefix)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_analyze_url() {
        let config = ClientConfig::default();
        assert_eq!(config.analyze_url(), "http://localhost:8000/api/v1/contracts/analyze");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_host() {
        let config = ClientConfig::with_host("10.0.0.5");
        assert_eq!(config.analyze_url(), "http://10.0.0.5:8000/api/v1/contracts/analyze");
    }

    #[test]
    fn test_trailing_slash_prefix() {
        let config = ClientConfig {
            api_prefix: "/api/v1/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.analyze_url(), "http://localhost:8000/api/v1/contracts/analyze");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ClientConfig::with_host("").validate().is_err());
        assert!(ClientConfig::with_host("http://x").validate().is_err());
        assert!(ClientConfig { port: 0, ..ClientConfig::default() }.validate().is_err());
        assert!(ClientConfig { scheme: "ftp".into(), ..ClientConfig::default() }.validate().is_err());
        assert!(ClientConfig { api_prefix: "api".into(), ..ClientConfig::default() }.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"host": "analise.local"}"#).unwrap();
        assert_eq!(config.host, "analise.local");
        assert_eq!(config.port, 8000);
        assert_eq!(config.policy, UploadPolicy::RejectWhileBusy);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("overlap".parse::<UploadPolicy>().unwrap(), UploadPolicy::AllowOverlap);
        assert_eq!("REJECT".parse::<UploadPolicy>().unwrap(), UploadPolicy::RejectWhileBusy);
        assert!("queue".parse::<UploadPolicy>().is_err());
    }
}
