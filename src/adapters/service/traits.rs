//! Export service abstraction
//!
//! The controller talks to the remote export service exclusively through
//! this trait, so validation, request building and rendering stay testable
//! without a live network.

use crate::domain::{ExportRequest, ExportResultItem, PersistedSettings, Result};
use async_trait::async_trait;

/// Remote export service seam
///
/// One implementation speaks HTTP ([`super::HttpExportService`]); tests
/// substitute in-memory fakes.
#[async_trait]
pub trait ExportService: Send + Sync {
    /// Fetch the remotely persisted settings
    ///
    /// Returns `Ok(None)` when the service reports no prior settings
    /// (absent `success` or `config`). Transport or decoding problems are
    /// errors; the settings cache downgrades them to defaults.
    async fn fetch_settings(&self) -> Result<Option<PersistedSettings>>;

    /// Submit one batch export request and return the per-identifier
    /// results
    ///
    /// Exactly one call per submission: any batching or parallelism is the
    /// service's concern.
    async fn export_batch(&self, request: &ExportRequest) -> Result<Vec<ExportResultItem>>;

    /// Upload a BOM file for remote parsing and return the raw identifier
    /// strings found in it
    async fn parse_bom(&self, file_name: &str, content: Vec<u8>) -> Result<Vec<String>>;
}
