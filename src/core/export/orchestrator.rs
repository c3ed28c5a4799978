//! Export orchestrator - drives one batch submission end to end
//!
//! Validates readiness locally, builds the request from the registry,
//! issues exactly one call to the export service, interprets the outcome
//! and hands results to the renderer. Collaborators are injected so the
//! whole flow is testable without a live network or terminal.

use crate::adapters::service::ExportService;
use crate::core::export::summary::BatchSummary;
use crate::core::registry::IdentifierRegistry;
use crate::domain::{ExportOptions, ExportRequest, InputError, PartexError, Result};
use crate::render::ReportRenderer;
use crate::{log_export_complete, log_export_start};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source seam
///
/// Only differences between readings are meaningful. Injected so elapsed
/// times are deterministic in tests.
pub trait Clock: Send + Sync {
    /// A monotonic reading
    fn monotonic(&self) -> Duration;
}

/// Wall-clock backed time source
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clears the in-flight flag on every exit path, including panics in
/// result rendering.
struct SubmissionGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmissionGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> std::result::Result<Self, InputError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| InputError::ExportInFlight)?;
        Ok(Self { flag })
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Batch export orchestrator
///
/// # Example
///
/// ```no_run
/// use partex::adapters::service::HttpExportService;
/// use partex::config::ServiceConfig;
/// use partex::core::export::{ExportOrchestrator, SystemClock};
/// use partex::core::registry::IdentifierRegistry;
/// use partex::domain::ExportOptions;
/// use partex::render::TextReportRenderer;
/// use std::sync::Arc;
///
/// # async fn example() -> partex::domain::Result<()> {
/// let service = Arc::new(HttpExportService::new(&ServiceConfig::default())?);
/// let orchestrator = ExportOrchestrator::new(
///     service,
///     Arc::new(TextReportRenderer::new()),
///     Arc::new(SystemClock::new()),
/// );
///
/// let registry = IdentifierRegistry::new();
/// let summary = orchestrator
///     .submit(&registry, ExportOptions::default(), None, None)
///     .await?;
/// println!("exported {} components", summary.success);
/// # Ok(())
/// # }
/// ```
pub struct ExportOrchestrator {
    service: Arc<dyn ExportService>,
    renderer: Arc<dyn ReportRenderer>,
    clock: Arc<dyn Clock>,

    /// Gates against double submission; one outstanding request at most
    in_flight: AtomicBool,
}

impl ExportOrchestrator {
    /// Create an orchestrator with injected collaborators
    pub fn new(
        service: Arc<dyn ExportService>,
        renderer: Arc<dyn ReportRenderer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            service,
            renderer,
            clock,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently outstanding
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit one batch export
    ///
    /// Preconditions are checked locally before any network traffic: the
    /// registry must be non-empty, at least one option selected, and no
    /// other submission outstanding. Exactly one request is issued
    /// regardless of batch size; the service handles any internal
    /// parallelism.
    ///
    /// On success the results and locally computed summary are handed to
    /// the renderer. On a service failure a single synthetic failed entry
    /// is rendered as a persistent record before the error propagates.
    pub async fn submit(
        &self,
        registry: &IdentifierRegistry,
        options: ExportOptions,
        export_path: Option<String>,
        file_prefix: Option<String>,
    ) -> Result<BatchSummary> {
        if registry.is_empty() {
            return Err(InputError::EmptyInput.into());
        }
        if !options.any() {
            return Err(InputError::NoOptionSelected.into());
        }

        let _guard = SubmissionGuard::acquire(&self.in_flight)?;

        let started = self.clock.monotonic();
        let request = ExportRequest::new(registry.snapshot(), options, export_path, file_prefix);
        log_export_start!(request.component_ids.len());

        match self.service.export_batch(&request).await {
            Ok(results) => {
                let elapsed = self.clock.monotonic().saturating_sub(started);
                let summary = BatchSummary::from_results(&results, elapsed);
                log_export_complete!(summary.success, summary.failed, elapsed);

                self.renderer.render(&results, &summary)?;
                Ok(summary)
            }
            Err(err) => {
                tracing::error!(error = %err, "Batch export failed");
                if let PartexError::Service(service_err) = &err {
                    // Persistent record so the failure outlives the
                    // transient message.
                    if let Err(render_err) = self.renderer.render_failure(&service_err.to_string())
                    {
                        tracing::warn!(error = %render_err, "Failed to render failure entry");
                    }
                }
                Err(err)
            }
        }
    }
}
