//! Export orchestration
//!
//! This module provides the batch submission flow:
//! - Readiness checks and the in-flight gate
//! - Request building and the single service call
//! - Summary computation and reporting

pub mod orchestrator;
pub mod summary;

pub use orchestrator::{Clock, ExportOrchestrator, SystemClock};
pub use summary::BatchSummary;
