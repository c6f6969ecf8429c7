//! メインアプリケーションコンポーネント

use contract_analyzer_common::{
    handle_file_input, ClientConfig, EventKind, EventTarget, Outcome, StateHost, WidgetEvent,
};
use gloo::events::{EventListener, EventListenerOptions};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::api::FetchTransport;
use crate::components::{
    drop_zone::{apply_dom_capabilities, DropZone},
    header::Header,
    loading_overlay::LoadingOverlay,
    progress_bar::ProgressBar,
    results_panel::ResultsPanel,
};
use crate::export::download_artifact;
use crate::host::SignalHost;
use crate::notify::AlertNotifier;

/// ビルド時に指定された接続先（未指定ならlocalhost）
pub fn client_config() -> ClientConfig {
    let mut config = match option_env!("CONTRACT_ANALYZER_HOST") {
        Some(host) if !host.trim().is_empty() => ClientConfig::with_host(host.trim()),
        _ => ClientConfig::default(),
    };
    if let Some(port) = option_env!("CONTRACT_ANALYZER_PORT").and_then(|p| p.parse().ok()) {
        config.port = port;
    }
    if let Some(policy) = option_env!("CONTRACT_ANALYZER_POLICY").and_then(|p| p.parse().ok()) {
        config.policy = policy;
    }
    config
}

/// ページ本体へのドロップでブラウザがPDFを開かないようにする
fn install_body_guards() {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    for kind in EventKind::DRAG {
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&body, kind.dom_name(), options, move |ev| {
            apply_dom_capabilities(ev, EventTarget::Body, kind);
        })
        .forget();
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = client_config();
    if let Err(e) = config.validate() {
        gloo::console::error!(format!("invalid analyzer config: {}", e));
    }
    gloo::console::log!(format!("analyze endpoint: {}", config.analyze_url()));

    let host = SignalHost::new(config.policy);
    let widget = host.view();

    install_body_guards();

    // ドロップゾーンのイベントハンドラ
    let on_event = {
        let host = host.clone();
        move |event: WidgetEvent<File>| {
            let Some(files) = host.update(|state| state.apply_event(EventTarget::DropZone, event)) else {
                return;
            };
            let host = host.clone();
            let config = config.clone();
            spawn_local(async move {
                let outcome = handle_file_input(&host, &FetchTransport, &AlertNotifier, &config, files).await;
                match outcome {
                    Outcome::Failed(e) => gloo::console::error!(format!("Error: {}", e)),
                    Outcome::Busy => gloo::console::warn!("upload in progress; input ignored"),
                    other => gloo::console::debug!(format!("upload outcome: {:?}", other)),
                }
            });
        }
    };

    // JSONダウンロードハンドラ
    let on_export = {
        let host = host.clone();
        move |_| {
            let Some(artifact) = host.with(|state| state.result.as_ref().map(|r| r.export())) else {
                return;
            };
            if let Err(e) = download_artifact(&artifact) {
                gloo::console::error!(format!("download failed: {:?}", e));
            }
        }
    };

    view! {
        <div class="container">
            <Header />

            <DropZone widget=widget on_event=on_event />

            <ProgressBar widget=widget />

            <ResultsPanel widget=widget on_export=on_export />

            <LoadingOverlay widget=widget />
        </div>
    }
}
