//! 結果表示・保存の統合テスト

use contract_analyzer::export::{format_results, write_artifact};
use contract_analyzer_common::{render, AnalysisResult, WidgetState};
use serde_json::json;
use tempfile::tempdir;

fn showing(value: serde_json::Value) -> WidgetState {
    let mut state = WidgetState::default();
    state.begin_upload();
    let _ = state.finish_upload(Ok(AnalysisResult::new(value)));
    state
}

#[test]
fn test_write_artifact_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = AnalysisResult::new(json!({"status": "ok", "clauses": 3}));

    let path = write_artifact(&result.export(), dir.path()).expect("書き出し失敗");
    assert_eq!(path.file_name().unwrap(), "analise-contrato.json");

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed = AnalysisResult::from_body(&content).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_write_artifact_creates_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("saida").join("2024");
    let result = AnalysisResult::new(json!([1, 2, 3]));

    let path = write_artifact(&result.export(), &nested).unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[test]
fn test_write_artifact_overwrites() {
    let dir = tempdir().unwrap();
    write_artifact(&AnalysisResult::new(json!({"v": 1})).export(), dir.path()).unwrap();
    let path = write_artifact(&AnalysisResult::new(json!({"v": 2})).export(), dir.path()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(parsed, json!({"v": 2}));
}

#[test]
fn test_format_results_raw_is_viewer_text() {
    let state = showing(json!({"status": "ok", "clauses": 3}));
    let view = render(&state);
    assert_eq!(format_results(&view, true), view.viewer_text.clone().unwrap());
}

#[test]
fn test_format_results_with_summary() {
    let state = showing(json!({
        "tipo_fluxo": "RE",
        "risco": "Médio",
        "confianca": 0.85
    }));
    let out = format_results(&render(&state), false);

    assert!(out.starts_with("Resumo:\n"));
    assert!(out.contains("Risco"));
    assert!(out.contains("85%"));
    // 要約の後に整形JSON
    let json_start = out.find('{').unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();
    assert_eq!(parsed["tipo_fluxo"], "RE");
}

#[test]
fn test_format_results_without_summary() {
    let state = showing(json!({"status": "ok"}));
    let out = format_results(&render(&state), false);
    assert!(!out.contains("Resumo"));
    assert!(out.starts_with('{'));
}
