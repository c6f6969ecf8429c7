//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Análise de Contratos"</h1>
            <p class="text-muted">"Envie o contrato em PDF para análise automática"</p>
        </header>
    }
}
