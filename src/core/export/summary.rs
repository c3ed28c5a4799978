//! Batch summary and reporting
//!
//! Aggregate statistics over one batch export, computed client-side from
//! the per-identifier result list and a locally recorded start time. Never
//! transmitted; replaced wholesale on every completed request.

use crate::domain::ExportResultItem;
use std::time::Duration;

/// Summary of one batch export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Total number of result items
    pub total: usize,

    /// Items whose export succeeded
    pub success: usize,

    /// Items whose export failed
    pub failed: usize,

    /// Wall-clock time between submission and response
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Compute the summary from a result list and the measured elapsed time
    pub fn from_results(results: &[ExportResultItem], elapsed: Duration) -> Self {
        let total = results.len();
        let success = results.iter().filter(|item| item.success).count();
        Self {
            total,
            success,
            failed: total - success,
            elapsed,
        }
    }

    /// Elapsed wall-clock seconds as shown in the report
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Whether every item succeeded
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    /// Success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.success as f64 / self.total as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total,
            success = self.success,
            failed = self.failed,
            elapsed_secs = format!("{:.2}", self.elapsed_seconds()),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Batch export completed"
        );
    }
}
