//! # partex - Component Library Batch Export Client
//!
//! partex is the client-side controller for a component-library export
//! tool: it collects component identifiers (typed, pasted, or extracted
//! from an uploaded BOM file), deduplicates and validates them, submits a
//! single batch request to a remote export service, and renders a
//! per-identifier success/failure report with aggregate statistics.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** candidate identifiers from free-form text
//! - **Collecting** them in an ordered, deduplicated registry
//! - **Submitting** one batch export request per run
//! - **Reporting** per-identifier results with aggregate statistics
//!
//! The heavy lifting — BOM parsing and library file generation — happens
//! on the remote service; the client issues a single call per action
//! regardless of batch size.
//!
//! ## Architecture
//!
//! partex follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (extraction, registry, orchestration)
//! - [`adapters`] - The export service integration
//! - [`domain`] - Core domain types and models
//! - [`render`] - Result report rendering
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use partex::adapters::service::HttpExportService;
//! use partex::config::PartexConfig;
//! use partex::core::export::{ExportOrchestrator, SystemClock};
//! use partex::core::registry::{EntrySource, IdentifierRegistry};
//! use partex::domain::{ComponentId, ExportOptions};
//! use partex::render::TextReportRenderer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PartexConfig::default();
//!     let service = Arc::new(HttpExportService::new(&config.service)?);
//!
//!     let mut registry = IdentifierRegistry::new();
//!     registry.add(ComponentId::new("C12345")?, EntrySource::Typed);
//!
//!     let orchestrator = ExportOrchestrator::new(
//!         service,
//!         Arc::new(TextReportRenderer::new()),
//!         Arc::new(SystemClock::new()),
//!     );
//!
//!     let summary = orchestrator
//!         .submit(&registry, ExportOptions::default(), None, None)
//!         .await?;
//!     println!("Exported {} components", summary.success);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! partex uses the [`domain::PartexError`] hierarchy for all errors. Input
//! problems ([`domain::InputError`]) are detected before any network call;
//! service problems ([`domain::ServiceError`]) never expose the HTTP
//! client's types.
//!
//! ## Logging
//!
//! partex uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting export");
//! warn!(count = 0, "No identifiers extracted");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod render;
