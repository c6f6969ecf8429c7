//! 解析結果の表示・保存

use crate::error::Result;
use contract_analyzer_common::{ExportArtifact, WidgetView};
use std::path::{Path, PathBuf};

/// 結果パネル相当の出力を組み立てる
pub fn format_results(view: &WidgetView, raw: bool) -> String {
    let json = view.viewer_text.clone().unwrap_or_default();
    if raw {
        return json;
    }

    let mut out = String::new();
    if !view.summary_rows.is_empty() {
        let width = view
            .summary_rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        out.push_str("Resumo:\n");
        for (label, value) in &view.summary_rows {
            let pad = width - label.chars().count();
            out.push_str(&format!("  {}{} : {}\n", label, " ".repeat(pad), value));
        }
        out.push('\n');
    }
    out.push_str(&json);
    out
}

/// エクスポートファイルを書き出す
pub fn write_artifact(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(artifact.file_name);
    std::fs::write(&path, &artifact.contents)?;
    Ok(path)
}
