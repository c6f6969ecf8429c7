//! アップロードウィジェットの処理フロー
//!
//! 入力検証 → 送信 → 結果表示/エラー通知 を、送信手段（[`AnalysisTransport`]）・
//! 状態の置き場所（[`StateHost`]）・通知手段（[`Notifier`]）から独立して実装する。
//! ブラウザとCLIはそれぞれの実装を渡すだけでよい。

use std::cell::RefCell;

use crate::config::{ClientConfig, FILE_FIELD};
use crate::error::TransferError;
use crate::event::{EventTarget, WidgetEvent};
use crate::state::{InputDecision, Notice, WidgetState};
use crate::types::{AnalysisResult, PickedFile};

/// HTTPレスポンス（ステータスと本文のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 解析サービスへの送信手段
///
/// Err はレスポンスを得られなかった場合（ネットワーク障害）のみ。
#[allow(async_fn_in_trait)]
pub trait AnalysisTransport {
    type File: PickedFile;

    /// `field` にファイルを添付したmultipartをPOSTする
    async fn post_file(&self, url: &str, field: &str, file: &Self::File) -> Result<RawResponse, TransferError>;
}

/// 状態の置き場所
pub trait StateHost {
    fn update<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R;

    fn with<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> R;
}

impl StateHost for RefCell<WidgetState> {
    fn update<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn with<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> R {
        f(&self.borrow())
    }
}

/// ユーザー通知
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// 1回の入力処理の結末
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 何もしなかった（空入力・ドラッグ系イベント）
    Ignored,
    /// 送信中のため無視した
    Busy,
    /// 検証エラー
    Rejected,
    /// 送信して結果を表示した
    Displayed,
    /// 送信に失敗した
    Failed(TransferError),
}

/// ファイルを送信し、レスポンスを解析結果に変換する
pub async fn upload_file<T: AnalysisTransport>(
    transport: &T,
    config: &ClientConfig,
    file: &T::File,
) -> Result<AnalysisResult, TransferError> {
    let response = transport.post_file(&config.analyze_url(), FILE_FIELD, file).await?;

    if !response.is_success() {
        return Err(TransferError::Status(response.status));
    }

    AnalysisResult::from_body(&response.body).map_err(|e| TransferError::Parse(e.to_string()))
}

/// ファイル一覧を受け取り、検証・送信・表示まで行う
pub async fn handle_file_input<S, T, N>(
    host: &S,
    transport: &T,
    notifier: &N,
    config: &ClientConfig,
    files: Vec<T::File>,
) -> Outcome
where
    S: StateHost,
    T: AnalysisTransport,
    N: Notifier,
{
    let decision = host.with(|state| state.handle_file_input(files));
    let file = match decision {
        InputDecision::Upload(file) => file,
        InputDecision::Empty => return Outcome::Ignored,
        InputDecision::Busy => return Outcome::Busy,
        InputDecision::Reject(notice) => {
            notifier.notify(&notice);
            return Outcome::Rejected;
        }
    };

    host.update(WidgetState::begin_upload);

    let result = upload_file(transport, config, &file).await;
    let outcome = match &result {
        Ok(_) => Outcome::Displayed,
        Err(e) => Outcome::Failed(e.clone()),
    };

    // 成功・失敗どちらでもローディング表示は消える
    if let Some(notice) = host.update(|state| state.finish_upload(result)) {
        notifier.notify(&notice);
    }
    outcome
}

/// イベントを適用し、ファイルを運ぶものなら入力処理へ渡す
pub async fn dispatch<S, T, N>(
    host: &S,
    transport: &T,
    notifier: &N,
    config: &ClientConfig,
    target: EventTarget,
    event: WidgetEvent<T::File>,
) -> Outcome
where
    S: StateHost,
    T: AnalysisTransport,
    N: Notifier,
{
    match host.update(|state| state.apply_event(target, event)) {
        Some(files) => handle_file_input(host, transport, notifier, config, files).await,
        None => Outcome::Ignored,
    }
}
