//! ファイル選択モジュール
//!
//! パス指定またはカレントディレクトリからの対話選択でファイルを決め、
//! 拡張子から宣言MIMEタイプを付けて読み込む。

use crate::error::{ContractAnalyzerError, Result};
use contract_analyzer_common::{SelectedFile, PDF_MIME_TYPE};
use dialoguer::{Input, Select};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 探索する深さ（カレント + 1階層）
const PICKER_DEPTH: usize = 2;

/// 拡張子から宣言MIMEタイプを決める
pub fn declared_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => PDF_MIME_TYPE,
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        "json" => "application/json",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// ファイルを読み込んで SelectedFile にする
pub fn load_file(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(ContractAnalyzerError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Ok(SelectedFile::new(file_name, declared_mime_type(path), bytes))
}

/// 選択候補のPDFを列挙（隠しディレクトリは除外）
pub fn find_pdf_candidates(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .max_depth(PICKER_DEPTH)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| declared_mime_type(p) == PDF_MIME_TYPE)
        .collect();
    found.sort();
    found
}

/// 対話的にファイルを選ぶ
pub fn pick_file(root: &Path) -> Result<PathBuf> {
    let candidates = find_pdf_candidates(root);

    if candidates.is_empty() {
        let path: String = Input::new()
            .with_prompt("PDFファイルのパス")
            .interact_text()?;
        let path = path.trim();
        if path.is_empty() {
            return Err(ContractAnalyzerError::NoFileSelected);
        }
        return Ok(PathBuf::from(path));
    }

    let labels: Vec<String> = candidates
        .iter()
        .map(|p| p.strip_prefix(root).unwrap_or(p).display().to_string())
        .collect();

    let selection = Select::new()
        .with_prompt("解析するPDFを選択")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    selection
        .map(|i| candidates[i].clone())
        .ok_or(ContractAnalyzerError::NoFileSelected)
}
