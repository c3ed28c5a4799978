//! Domain error types
//!
//! This module defines the error hierarchy for partex. All errors are
//! domain-specific and don't expose third-party types: the HTTP adapter maps
//! transport failures into [`ServiceError`] variants before they cross the
//! seam.

use thiserror::Error;

/// Main partex error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PartexError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Locally-detected input problems, checked before any network call
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Export service failures
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Input-validation errors
///
/// Every variant is detected locally and recovered locally: the controller
/// surfaces a transient message and waits for the next user action. None of
/// these issues a network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// No identifiers present at submit time
    #[error("no component identifiers to export")]
    EmptyInput,

    /// No export option chosen
    #[error("select at least one export option (symbol, footprint or 3D model)")]
    NoOptionSelected,

    /// A submission is already outstanding
    #[error("an export is already in progress")]
    ExportInFlight,

    /// BOM upload extension not recognized
    #[error("unsupported file type '{0}': expected .xlsx, .xls or .csv")]
    UnsupportedFileType(String),

    /// The paste source could not be read
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

/// Export-service errors
///
/// Errors that occur when talking to the remote export service. These don't
/// expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Network unreachable or request could not be sent
    #[error("failed to reach export service: {0}")]
    Transport(String),

    /// Non-2xx HTTP response; `message` is the structured error body when
    /// one was parseable, otherwise the status code verbatim
    #[error("export service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 2xx response carrying `success: false`
    #[error("{0}")]
    Rejected(String),

    /// 2xx response whose payload could not be decoded
    #[error("invalid response from export service: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PartexError {
    fn from(err: std::io::Error) -> Self {
        PartexError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PartexError {
    fn from(err: serde_json::Error) -> Self {
        PartexError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PartexError {
    fn from(err: toml::de::Error) -> Self {
        PartexError::Configuration(format!("TOML parse error: {err}"))
    }
}
