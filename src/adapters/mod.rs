//! External system integrations for partex.
//!
//! This module provides the adapter for the remote export service:
//!
//! - [`service`] - Export service API (settings, batch export, BOM parsing)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with mock implementations: the rest of the crate only
//! sees the [`service::ExportService`] trait, never the HTTP client.

pub mod service;
