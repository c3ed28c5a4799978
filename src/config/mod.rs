//! Configuration management for partex.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! partex uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PARTEX_*` environment overrides
//! - Default values for every setting (a missing file still works)
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use partex::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("partex.toml")?;
//! println!("Export service: {}", config.service.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "partex"
//! log_level = "info"
//!
//! [service]
//! base_url = "http://localhost:8000"
//! timeout_seconds = 300
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, PartexConfig, ServiceConfig};
