//! Core business logic for partex.
//!
//! This module contains the identifier collection and batch export
//! orchestration workflow.
//!
//! # Modules
//!
//! - [`extract`] - Pattern-based identifier extraction from pasted text
//! - [`registry`] - Ordered, deduplicated pending-identifier collection
//! - [`settings`] - Session mirror of remotely persisted settings
//! - [`bom`] - BOM upload with local extension gate
//! - [`export`] - Orchestration of the single batch request
//!
//! # Workflow
//!
//! 1. **Collect**: typed, pasted or BOM-imported identifiers feed the
//!    registry; duplicates are dropped silently
//! 2. **Check**: readiness rules run locally before any network call
//! 3. **Submit**: exactly one batch request to the export service
//! 4. **Interpret**: per-identifier results and a locally computed summary
//! 5. **Report**: grouped per-identifier rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use partex::adapters::service::HttpExportService;
//! use partex::config::ServiceConfig;
//! use partex::core::export::{ExportOrchestrator, SystemClock};
//! use partex::core::registry::{EntrySource, IdentifierRegistry};
//! use partex::domain::{ComponentId, ExportOptions};
//! use partex::render::TextReportRenderer;
//! use std::sync::Arc;
//!
//! # async fn example() -> partex::domain::Result<()> {
//! let service = Arc::new(HttpExportService::new(&ServiceConfig::default())?);
//! let orchestrator = ExportOrchestrator::new(
//!     service,
//!     Arc::new(TextReportRenderer::new()),
//!     Arc::new(SystemClock::new()),
//! );
//!
//! let mut registry = IdentifierRegistry::new();
//! let id = ComponentId::new("C12345").expect("valid id");
//! registry.add(id, EntrySource::Typed);
//!
//! let summary = orchestrator
//!     .submit(&registry, ExportOptions::default(), None, None)
//!     .await?;
//! println!("{} succeeded, {} failed", summary.success, summary.failed);
//! # Ok(())
//! # }
//! ```

pub mod bom;
pub mod export;
pub mod extract;
pub mod registry;
pub mod settings;
