//! reqwestによるmultipart送信

use crate::config::Config;
use crate::error::Result;
use contract_analyzer_common::{AnalysisTransport, RawResponse, SelectedFile, TransferError};
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// HTTPクライアント（multipart/form-data でPOST）
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self { client: builder.build()? })
    }
}

impl AnalysisTransport for ReqwestTransport {
    type File = SelectedFile;

    async fn post_file(&self, url: &str, field: &str, file: &SelectedFile) -> std::result::Result<RawResponse, TransferError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| TransferError::Network(e.to_string()))?;
        let form = Form::new().part(field.to_string(), part);

        debug!(url, file = %file.file_name, bytes = file.bytes.len(), "POST multipart");

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransferError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransferError::Network(e.to_string()))?;

        debug!(status, body_len = body.len(), "response received");
        Ok(RawResponse { status, body })
    }
}
