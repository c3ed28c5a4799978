//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "partex.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            eprintln!("❌ Configuration file already exists: {}", self.output);
            eprintln!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point [service] base_url at your export service");
                println!("  2. Check the connection: partex settings");
                println!("  3. Run an export: partex export C12345");
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ Failed to write configuration file: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration content
    fn sample_config() -> &'static str {
        r#"# partex configuration file
# Batch export client for component-library generation services

[application]
name = "partex"
log_level = "info"  # trace | debug | info | warn | error

[service]
# Base URL of the export service
base_url = "http://localhost:8000"
# Overall request timeout; large batches are generated remotely
timeout_seconds = 300
connect_timeout_seconds = 30

[logging]
# Write logs to a rotating local file in addition to the console
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly
"#
    }
}
