//! 契約書PDF解析クライアント（CLI）

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod picker;
pub mod terminal;
pub mod transport;
