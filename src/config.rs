use crate::error::{ContractAnalyzerError, Result};
use contract_analyzer_common::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const HOST_ENV: &str = "CONTRACT_ANALYZER_HOST";
pub const PORT_ENV: &str = "CONTRACT_ANALYZER_PORT";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    /// HTTPタイムアウト（None = 無制限）
    pub timeout_seconds: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.client.validate()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ContractAnalyzerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("contract-analyzer").join("config.json"))
    }

    /// 環境変数で接続先を上書き
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(std::env::var(HOST_ENV).ok(), std::env::var(PORT_ENV).ok())
    }

    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.client.host = host.trim().to_string();
        }
        if let Some(port) = port {
            self.client.port = port
                .trim()
                .parse()
                .map_err(|_| ContractAnalyzerError::Config(format!("{}が不正です: {}", PORT_ENV, port)))?;
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.filter(|s| *s > 0).map(Duration::from_secs)
    }
}
