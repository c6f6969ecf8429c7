//! ドロップゾーンコンポーネント
//!
//! ドラッグ&ドロップとファイル選択の両方を受け付け、
//! イベント対応表に従ってデフォルト動作の抑止とファイル転送を行う。

use contract_analyzer_common::{capabilities, EventKind, EventTarget, WidgetEvent, WidgetView, PDF_MIME_TYPE};
use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList};

/// FileList → Vec<File>
pub fn files_from_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// 対応表に従ってDOMイベントのデフォルト動作・伝播を止める
pub fn apply_dom_capabilities(ev: &web_sys::Event, target: EventTarget, kind: EventKind) {
    let caps = capabilities(target, kind);
    if caps.suppress_default {
        ev.prevent_default();
    }
    if caps.stop_propagation {
        ev.stop_propagation();
    }
}

#[component]
pub fn DropZone<F>(widget: ReadSignal<WidgetView>, on_event: F) -> impl IntoView
where
    F: Fn(WidgetEvent<File>) + 'static + Clone,
{
    let input_ref = NodeRef::<html::Input>::new();
    let is_enabled = move || widget.with(|v| v.input_enabled);

    let drag_handler = {
        let on_event = on_event.clone();
        move |kind: EventKind| {
            let on_event = on_event.clone();
            move |ev: DragEvent| {
                apply_dom_capabilities(&ev, EventTarget::DropZone, kind);
                let event = match kind {
                    EventKind::DragEnter => WidgetEvent::DragEnter,
                    EventKind::DragOver => WidgetEvent::DragOver,
                    EventKind::DragLeave => WidgetEvent::DragLeave,
                    _ => WidgetEvent::Drop(files_from_list(ev.data_transfer().and_then(|dt| dt.files()))),
                };
                on_event(event);
            }
        }
    };

    let on_change = {
        let on_event = on_event.clone();
        move |ev: web_sys::Event| {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let files = files_from_list(input.files());
            // 同じファイルを再選択してもchangeが発火するように
            input.set_value("");
            on_event(WidgetEvent::FileSelected(files));
        }
    };

    let on_click = move |_| {
        if !is_enabled() {
            return;
        }
        // ファイル選択ダイアログを開く
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    view! {
        <div
            id="dropZone"
            class=move || {
                let mut classes = vec!["drop-zone"];
                if widget.with(|v| v.drop_zone_highlighted) {
                    classes.push("drag-over");
                }
                if !is_enabled() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            style:display=move || if widget.with(|v| v.drop_zone_visible) { "block" } else { "none" }
            on:dragenter=drag_handler(EventKind::DragEnter)
            on:dragover=drag_handler(EventKind::DragOver)
            on:dragleave=drag_handler(EventKind::DragLeave)
            on:drop=drag_handler(EventKind::Drop)
            on:click=on_click
        >
            <div class="upload-icon">"📄"</div>
            <p>"Arraste o contrato em PDF aqui ou clique para selecionar"</p>
            <p class="text-muted">"Formato aceito: PDF"</p>
            <input
                id="fileInput"
                type="file"
                accept=PDF_MIME_TYPE
                style="display: none"
                node_ref=input_ref
                disabled=move || !is_enabled()
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
