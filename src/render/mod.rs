//! Result presentation
//!
//! The renderer seam and its plain-text implementation. Business rules
//! stay out of here: the renderer only projects results it is handed.

pub mod report;

pub use report::{ReportRenderer, TextReportRenderer};
