//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use contract_analyzer::config::Config;
use contract_analyzer::error::ContractAnalyzerError;
use contract_analyzer::picker;
use contract_analyzer_common::ClientConfig;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを指定した場合
#[test]
fn test_load_nonexistent_file() {
    let result = picker::load_file(Path::new("/nonexistent/path/12345/contrato.pdf"));
    assert!(matches!(result, Err(ContractAnalyzerError::FileNotFound(_))));
}

/// ディレクトリを指定した場合
#[test]
fn test_load_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = picker::load_file(dir.path());
    assert!(matches!(result, Err(ContractAnalyzerError::FileNotFound(_))));
}

/// ContractAnalyzerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ContractAnalyzerError::Config("テスト設定エラー".to_string()),
        ContractAnalyzerError::FileNotFound("contrato.pdf".to_string()),
        ContractAnalyzerError::NoFileSelected,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 共通クレートのエラーはそのままのメッセージで表示される
#[test]
fn test_widget_error_message() {
    let invalid = ClientConfig { port: 0, ..ClientConfig::default() };
    let err: ContractAnalyzerError = invalid.validate().unwrap_err().into();
    assert_eq!(format!("{}", err), "Config error: port must be non-zero");
}

/// 壊れた設定ファイル
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ContractAnalyzerError::JsonParse(_))));
}

/// 不正な設定は保存しない
#[test]
fn test_config_save_rejects_invalid() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    let config = Config {
        client: ClientConfig { port: 0, ..ClientConfig::default() },
        ..Config::default()
    };

    let result = config.save_to(&path);
    assert!(matches!(result, Err(ContractAnalyzerError::Widget(_))));
    assert!(!path.exists());
}

/// 設定ファイルが無ければデフォルト
#[test]
fn test_config_missing_file_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("none.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_save_load_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");
    let config = Config {
        client: ClientConfig::with_host("analise.local"),
        timeout_seconds: Some(60),
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}
