//! 端末向けの状態ホストと通知
//!
//! 状態を更新するたびに描画結果を導出し、送信中はスピナーを表示する。

use crate::error::{ContractAnalyzerError, Result};
use contract_analyzer_common::{render, Notice, Notifier, Outcome, StateHost, UploadPolicy, WidgetState, WidgetView};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// 端末用の状態ホスト
pub struct TerminalHost {
    state: RefCell<WidgetState>,
    spinner: RefCell<Option<ProgressBar>>,
    show_progress: bool,
}

impl TerminalHost {
    pub fn new(policy: UploadPolicy, show_progress: bool) -> Self {
        let mut state = WidgetState::new(policy);
        state.initialize();
        Self {
            state: RefCell::new(state),
            spinner: RefCell::new(None),
            show_progress,
        }
    }

    /// 現在の描画結果
    pub fn view(&self) -> WidgetView {
        render(&self.state.borrow())
    }

    fn sync_progress(&self, view: &WidgetView) {
        let mut spinner = self.spinner.borrow_mut();
        match (view.progress_visible && self.show_progress, spinner.is_some()) {
            (true, false) => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                pb.set_message("Analisando contrato...");
                pb.enable_steady_tick(Duration::from_millis(100));
                *spinner = Some(pb);
            }
            (false, true) => {
                if let Some(pb) = spinner.take() {
                    pb.finish_and_clear();
                }
            }
            _ => {}
        }
    }
}

impl StateHost for TerminalHost {
    fn update<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        let out = f(&mut self.state.borrow_mut());
        self.sync_progress(&self.view());
        out
    }

    fn with<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> R {
        f(&self.state.borrow())
    }
}

/// 標準エラーへ通知を出す
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::warn!(?notice, "notice");
        eprintln!("⚠ {}", notice.message());
    }
}

/// 入力処理の結末を成否に変換する
///
/// 検証・送信の失敗は通知済みのため Err にせず `Ok(false)` を返す。
pub fn completed(outcome: &Outcome) -> Result<bool> {
    match outcome {
        Outcome::Displayed => Ok(true),
        Outcome::Rejected | Outcome::Failed(_) => Ok(false),
        Outcome::Busy | Outcome::Ignored => Err(ContractAnalyzerError::NoFileSelected),
    }
}
