//! ウィジェット状態の保持とリアクティブな描画結果

use std::sync::{Arc, Mutex, PoisonError};

use contract_analyzer_common::{render, StateHost, UploadPolicy, WidgetState, WidgetView};
use leptos::prelude::*;

/// 状態本体と、render済みのビュー（シグナル）を持つ
#[derive(Clone)]
pub struct SignalHost {
    state: Arc<Mutex<WidgetState>>,
    view: RwSignal<WidgetView>,
}

impl SignalHost {
    pub fn new(policy: UploadPolicy) -> Self {
        let mut state = WidgetState::new(policy);
        state.initialize();
        let view = RwSignal::new(render(&state));
        Self {
            state: Arc::new(Mutex::new(state)),
            view,
        }
    }

    /// コンポーネントが購読するビュー
    pub fn view(&self) -> ReadSignal<WidgetView> {
        self.view.read_only()
    }
}

impl StateHost for SignalHost {
    fn update<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        let (out, view) = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            let out = f(&mut state);
            (out, render(&state))
        };
        // 変化がなければ購読側を起こさない
        if self.view.with_untracked(|current| *current != view) {
            self.view.set(view);
        }
        out
    }

    fn with<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> R {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }
}
