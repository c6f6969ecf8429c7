//! ウィジェットの状態と純粋な描画関数
//!
//! 状態遷移はすべて [`WidgetState`] のメソッドで行い、
//! 表示は [`render`] が状態から [`WidgetView`] を導出する。

use crate::config::UploadPolicy;
use crate::error::{Error, TransferError};
use crate::event::{capabilities, EventTarget, Highlight, WidgetEvent};
use crate::types::{AnalysisResult, PickedFile, PDF_MIME_TYPE};

/// UIモード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Uploading,
    ShowingResults,
}

/// ユーザー向け通知（ブロッキングのアラート相当）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// PDF以外が選択された
    InvalidFileType,
    /// 送信・解析の失敗
    UploadFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::InvalidFileType => "Por favor, selecione um arquivo PDF.",
            Notice::UploadFailed => "Erro ao processar o arquivo. Por favor, tente novamente.",
        }
    }
}

impl From<&Error> for Notice {
    fn from(error: &Error) -> Self {
        match error {
            Error::Validation { .. } => Notice::InvalidFileType,
            _ => Notice::UploadFailed,
        }
    }
}

/// ファイル入力に対する判定
#[derive(Debug, PartialEq)]
pub enum InputDecision<F> {
    /// 送信する
    Upload(F),
    /// PDF以外（通知のみ）
    Reject(Notice),
    /// 空のファイル一覧
    Empty,
    /// 送信中のため無視
    Busy,
}

/// ウィジェットの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    pub mode: UiState,
    pub highlighted: bool,
    pub result: Option<AnalysisResult>,
    pub policy: UploadPolicy,
}

impl WidgetState {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// 初期状態に戻す（ドロップゾーンのみ表示）
    pub fn initialize(&mut self) {
        self.mode = UiState::Idle;
        self.highlighted = false;
        self.result = None;
    }

    /// ファイル入力を受け付けるか
    pub fn accepts_input(&self) -> bool {
        !(self.policy == UploadPolicy::RejectWhileBusy && self.mode == UiState::Uploading)
    }

    /// ドロップゾーン上のイベントを適用し、転送すべきファイル一覧を返す
    pub fn apply_event<F>(&mut self, target: EventTarget, event: WidgetEvent<F>) -> Option<Vec<F>> {
        let caps = capabilities(target, event.kind());
        match caps.highlight {
            Highlight::Set => self.highlighted = true,
            Highlight::Clear => self.highlighted = false,
            Highlight::Keep => {}
        }
        if caps.forwards_files {
            event.into_files()
        } else {
            None
        }
    }

    /// ファイル一覧を検証し、送信対象を決める。状態は変更しない
    pub fn handle_file_input<F: PickedFile>(&self, files: Vec<F>) -> InputDecision<F> {
        let Some(file) = files.into_iter().next() else {
            return InputDecision::Empty;
        };
        if let Err(error) = validate_file(&file) {
            return InputDecision::Reject(Notice::from(&error));
        }
        if !self.accepts_input() {
            return InputDecision::Busy;
        }
        InputDecision::Upload(file)
    }

    /// 送信開始
    pub fn begin_upload(&mut self) {
        self.mode = UiState::Uploading;
        self.result = None;
    }

    /// 送信完了。失敗時は通知を返す
    pub fn finish_upload(&mut self, outcome: Result<AnalysisResult, TransferError>) -> Option<Notice> {
        match outcome {
            Ok(result) => {
                self.display_results(result);
                None
            }
            Err(_) => {
                self.mode = UiState::Idle;
                Some(Notice::UploadFailed)
            }
        }
    }

    /// 結果表示へ遷移
    pub fn display_results(&mut self, result: AnalysisResult) {
        self.mode = UiState::ShowingResults;
        self.result = Some(result);
    }
}

/// 宣言MIMEタイプが application/pdf と完全一致するか検証
pub fn validate_file<F: PickedFile>(file: &F) -> crate::error::Result<()> {
    let mime_type = file.mime_type();
    if mime_type == PDF_MIME_TYPE {
        Ok(())
    } else {
        Err(Error::Validation { mime_type })
    }
}

/// 描画結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub drop_zone_visible: bool,
    pub drop_zone_highlighted: bool,
    pub input_enabled: bool,
    pub progress_visible: bool,
    pub overlay_visible: bool,
    pub results_visible: bool,
    /// 結果ビューアの本文（整形済みJSON）
    pub viewer_text: Option<String>,
    /// 既知フィールドの要約（ラベル, 値）
    pub summary_rows: Vec<(&'static str, String)>,
}

/// 状態から表示を導出する
pub fn render(state: &WidgetState) -> WidgetView {
    let uploading = state.mode == UiState::Uploading;
    let showing = state.mode == UiState::ShowingResults;
    WidgetView {
        drop_zone_visible: true,
        drop_zone_highlighted: state.highlighted,
        input_enabled: state.accepts_input(),
        progress_visible: uploading,
        overlay_visible: uploading,
        results_visible: showing,
        viewer_text: if showing {
            state.result.as_ref().map(AnalysisResult::to_pretty_json)
        } else {
            None
        },
        summary_rows: state
            .result
            .as_ref()
            .filter(|_| showing)
            .and_then(AnalysisResult::summary)
            .map(|s| s.rows())
            .unwrap_or_default(),
    }
}
