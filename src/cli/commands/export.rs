//! Export command implementation
//!
//! Collects identifiers from CLI arguments, pasted text and BOM files,
//! then drives one batch submission through the orchestrator. All business
//! rules (validation, dedup, readiness) live in the core modules; this
//! module only wires triggers together and maps errors to exit codes.

use crate::adapters::service::HttpExportService;
use crate::cli::commands::exit_code;
use crate::config::load_config_or_default;
use crate::core::bom;
use crate::core::export::{ExportOrchestrator, SystemClock};
use crate::core::extract::IdentifierExtractor;
use crate::core::registry::{EntrySource, IdentifierRegistry};
use crate::core::settings::SettingsCache;
use crate::domain::{ComponentId, ExportOptions, InputError};
use crate::render::TextReportRenderer;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Component identifiers to queue for export
    pub ids: Vec<String>,

    /// Read pasted text from stdin and extract identifiers from it
    #[arg(long)]
    pub paste: bool,

    /// Import identifiers from a BOM file (.xlsx, .xls or .csv)
    #[arg(long, value_name = "FILE")]
    pub bom: Option<PathBuf>,

    /// Export schematic symbols
    #[arg(long)]
    pub symbol: bool,

    /// Export PCB footprints
    #[arg(long)]
    pub footprint: bool,

    /// Export 3D models
    #[arg(long)]
    pub model3d: bool,

    /// Output directory on the service side
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Library file name prefix
    #[arg(long, value_name = "NAME")]
    pub lib_name: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Configuration loading failed");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let service = match HttpExportService::new(&config.service) {
            Ok(s) => Arc::new(s),
            Err(e) => {
                eprintln!("Failed to initialize export service client: {e}");
                return Ok(2);
            }
        };

        // One-shot settings mirror; failures silently fall back to defaults.
        let settings = SettingsCache::load(service.as_ref()).await;

        let mut registry = IdentifierRegistry::new();
        self.collect_typed(&mut registry);

        if self.paste {
            match read_paste() {
                Ok(text) => {
                    let found = IdentifierExtractor::new().extract(&text);
                    let added = registry.add_bulk(found, EntrySource::Pasted);
                    println!("📋 Extracted {added} identifier(s) from pasted text");
                }
                Err(e) => {
                    let err = InputError::ClipboardUnavailable(e.to_string());
                    eprintln!("❌ {err}");
                    return Ok(2);
                }
            }
        }

        if let Some(path) = &self.bom {
            match bom::import(service.as_ref(), &mut registry, path).await {
                Ok(outcome) => {
                    println!(
                        "📄 BOM parsed remotely: {} identifier(s) found, {} added",
                        outcome.found, outcome.added
                    );
                }
                Err(e) => {
                    eprintln!("❌ {e}");
                    return Ok(exit_code(&e));
                }
            }
        }

        if registry.is_empty() {
            // Surfaced here rather than by the orchestrator so the hint
            // from prior settings can accompany the message.
            eprintln!("❌ {}", InputError::EmptyInput);
            if let Some(hint) = settings.placeholder_hint() {
                eprintln!("   Previously exported, for example: {hint}");
            }
            return Ok(2);
        }

        // Explicit option flags replace the persisted toggles wholesale;
        // with no flags the last-used options apply.
        let options = if self.symbol || self.footprint || self.model3d {
            ExportOptions {
                symbol: self.symbol,
                footprint: self.footprint,
                model3d: self.model3d,
            }
        } else {
            settings.options()
        };

        let export_path = self
            .output_dir
            .clone()
            .or_else(|| settings.output_folder_path().map(String::from));
        let file_prefix = self
            .lib_name
            .clone()
            .or_else(|| settings.output_lib_name().map(String::from));

        let orchestrator = ExportOrchestrator::new(
            service,
            Arc::new(TextReportRenderer::new()),
            Arc::new(SystemClock::new()),
        );

        let count = registry.len();
        if count > 1 {
            println!("🚀 Exporting {count} components (processed in parallel by the export service)...");
        } else {
            println!("🚀 Exporting 1 component...");
        }

        match orchestrator
            .submit(&registry, options, export_path, file_prefix)
            .await
        {
            Ok(summary) => {
                if summary.is_successful() {
                    println!(
                        "✅ Export finished in {:.2}s",
                        summary.elapsed_seconds()
                    );
                } else {
                    println!(
                        "⚠️  Export finished with {} failure(s) out of {}",
                        summary.failed, summary.total
                    );
                }
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ {e}");
                Ok(exit_code(&e))
            }
        }
    }

    /// Queue the identifiers typed as arguments, skipping invalid ones
    /// with a visible note.
    fn collect_typed(&self, registry: &mut IdentifierRegistry) {
        for raw in &self.ids {
            match ComponentId::new(raw) {
                Ok(id) => {
                    registry.add(id, EntrySource::Typed);
                }
                Err(reason) => {
                    eprintln!("⚠️  Skipping '{raw}': {reason}");
                }
            }
        }
    }
}

/// Reads the pasted text from stdin.
fn read_paste() -> std::io::Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
