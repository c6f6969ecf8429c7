//! ローディングオーバーレイ

use contract_analyzer_common::WidgetView;
use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(widget: ReadSignal<WidgetView>) -> impl IntoView {
    view! {
        <div class="loading-overlay" hidden=move || !widget.with(|v| v.overlay_visible)>
            <div class="spinner" />
            <p>"Analisando contrato..."</p>
        </div>
    }
}
