//! JSONダウンロード（Blob + Object URL）

use contract_analyzer_common::ExportArtifact;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// ブラウザのダウンロードを発火し、一時URLを解放する
pub fn download_artifact(artifact: &ExportArtifact) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&artifact.contents));
    let props = BlobPropertyBag::new();
    props.set_type(artifact.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;

    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body not available"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(artifact.file_name);

    body.append_child(&anchor)?;
    anchor.click();
    let revoked = Url::revoke_object_url(&url);
    body.remove_child(&anchor)?;
    revoked
}
