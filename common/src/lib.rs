//! Contract Analyzer Common Library
//!
//! CLIとWeb(WASM)で共有されるウィジェットモデル（状態・検証・送信フロー）

pub mod config;
pub mod error;
pub mod event;
pub mod state;
pub mod types;
pub mod widget;

pub use config::{ClientConfig, UploadPolicy, FILE_FIELD};
pub use error::{Error, Result, TransferError};
pub use event::{capabilities, Capabilities, EventKind, EventTarget, Highlight, WidgetEvent};
pub use state::{render, validate_file, InputDecision, Notice, UiState, WidgetState, WidgetView};
pub use types::{AnalysisResult, ContractSummary, ExportArtifact, PickedFile, SelectedFile, PDF_MIME_TYPE};
pub use widget::{dispatch, handle_file_input, upload_file, AnalysisTransport, Notifier, Outcome, RawResponse, StateHost};
