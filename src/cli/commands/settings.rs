//! Settings command implementation
//!
//! Fetches and displays the settings persisted on the export service.
//! Unlike the silent cache used during export, failures here are surfaced:
//! the user explicitly asked for the remote state.

use crate::adapters::service::{ExportService, HttpExportService};
use crate::cli::commands::exit_code;
use crate::config::load_config_or_default;
use clap::Args;

/// Arguments for the settings command
#[derive(Args, Debug)]
pub struct SettingsArgs {}

impl SettingsArgs {
    /// Execute the settings command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Fetching persisted settings");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let service = match HttpExportService::new(&config.service) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to initialize export service client: {e}");
                return Ok(2);
            }
        };

        match service.fetch_settings().await {
            Ok(Some(settings)) => {
                println!("📋 Persisted export settings ({})", service.base_url());
                println!(
                    "  Output folder:  {}",
                    display_or_dash(&settings.output_folder_path)
                );
                println!(
                    "  Library name:   {}",
                    display_or_dash(&settings.output_lib_name)
                );
                println!(
                    "  Options:        symbol={} footprint={} model3d={}",
                    settings.export_options.symbol,
                    settings.export_options.footprint,
                    settings.export_options.model3d
                );
                if settings.last_component_ids.is_empty() {
                    println!("  Last exported:  —");
                } else {
                    println!(
                        "  Last exported:  {}",
                        settings.last_component_ids.join(", ")
                    );
                }
                Ok(0)
            }
            Ok(None) => {
                println!("No settings persisted on the export service yet.");
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ {e}");
                Ok(exit_code(&e))
            }
        }
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "—"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_or_dash() {
        assert_eq!(display_or_dash(""), "—");
        assert_eq!(display_or_dash("/tmp/out"), "/tmp/out");
    }
}
