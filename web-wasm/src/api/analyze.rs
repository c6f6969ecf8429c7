//! 解析API呼び出し（fetch + FormData）

use contract_analyzer_common::{AnalysisTransport, PickedFile, RawResponse, TransferError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

impl PickedFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// JsValueのエラーをネットワークエラーに変換
fn network_error(value: JsValue) -> TransferError {
    TransferError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// ブラウザのfetchによる送信
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl AnalysisTransport for FetchTransport {
    type File = File;

    async fn post_file(&self, url: &str, field: &str, file: &File) -> Result<RawResponse, TransferError> {
        let form = FormData::new().map_err(network_error)?;
        form.append_with_blob_and_filename(field, file, &File::name(file))
            .map_err(network_error)?;

        // Content-Typeはブラウザがboundary付きで設定する
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&form);

        let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;

        let window = web_sys::window().ok_or_else(|| TransferError::Network("window not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let resp: Response = resp_value.dyn_into().map_err(network_error)?;

        let text = JsFuture::from(resp.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;

        Ok(RawResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use contract_analyzer_common::validate_file;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(name: &str, mime: &str) -> File {
        let parts = js_sys::Array::of1(&JsValue::from_str("%PDF-1.4"));
        let props = FilePropertyBag::new();
        props.set_type(mime);
        File::new_with_str_sequence_and_options(&parts, name, &props).unwrap()
    }

    #[wasm_bindgen_test]
    fn picked_file_reports_name_and_type() {
        let file = make_file("contract.pdf", "application/pdf");
        assert_eq!(PickedFile::name(&file), "contract.pdf");
        assert_eq!(PickedFile::mime_type(&file), "application/pdf");
        assert!(validate_file(&file).is_ok());
    }

    #[wasm_bindgen_test]
    fn png_file_fails_validation() {
        let file = make_file("foto.png", "image/png");
        assert!(validate_file(&file).is_err());
    }
}
