//! API連携

pub mod analyze;

pub use analyze::FetchTransport;
