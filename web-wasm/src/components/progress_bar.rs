//! プログレスバーコンポーネント
//!
//! 送信中のみ表示される不確定プログレス

use contract_analyzer_common::WidgetView;
use leptos::prelude::*;

#[component]
pub fn ProgressBar(widget: ReadSignal<WidgetView>) -> impl IntoView {
    view! {
        <div
            class="progress-container"
            style:display=move || if widget.with(|v| v.progress_visible) { "block" } else { "none" }
        >
            <div class="progress-bar">
                <div class="progress-fill indeterminate" />
            </div>
            <p class="progress-text">"Enviando..."</p>
        </div>
    }
}
