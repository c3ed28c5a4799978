//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for partex using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// partex - batch export client for component libraries
#[derive(Parser, Debug)]
#[command(name = "partex")]
#[command(version, about, long_about = None)]
#[command(author = "Partex Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "partex.toml", env = "PARTEX_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PARTEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect component identifiers and submit one batch export
    Export(commands::export::ExportArgs),

    /// Extract component identifiers from free-form text
    Extract(commands::extract::ExtractArgs),

    /// Show the settings persisted on the export service
    Settings(commands::settings::SettingsArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["partex", "export", "C12345"]);
        assert_eq!(cli.config, "partex.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["partex", "--config", "custom.toml", "export", "C12345"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["partex", "--log-level", "debug", "settings"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_extract() {
        let cli = Cli::parse_from(["partex", "extract", "some text with C12345"]);
        assert!(matches!(cli.command, Commands::Extract(_)));
    }

    #[test]
    fn test_cli_parse_settings() {
        let cli = Cli::parse_from(["partex", "settings"]);
        assert!(matches!(cli.command, Commands::Settings(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["partex", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_export_flags_parse() {
        let cli = Cli::parse_from([
            "partex",
            "export",
            "C12345",
            "c67890",
            "--symbol",
            "--bom",
            "parts.csv",
            "--lib-name",
            "mylib",
        ]);
        if let Commands::Export(args) = cli.command {
            assert_eq!(args.ids.len(), 2);
            assert!(args.symbol);
            assert!(!args.footprint);
            assert_eq!(args.bom.as_deref(), Some(std::path::Path::new("parts.csv")));
            assert_eq!(args.lib_name.as_deref(), Some("mylib"));
        } else {
            panic!("expected export command");
        }
    }
}
