//! Export service adapter
//!
//! The trait seam plus the HTTP implementation and the wire envelopes of
//! the service's JSON API.

pub mod client;
pub mod models;
pub mod traits;

pub use client::HttpExportService;
pub use traits::ExportService;
