//! Domain models and types for partex.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ComponentId`])
//! - **Domain models** ([`ExportRequest`], [`ExportResultItem`],
//!   [`PersistedSettings`])
//! - **Error types** ([`PartexError`], [`InputError`], [`ServiceError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern so an unvalidated string can never
//! reach an export request:
//!
//! ```
//! use partex::domain::ComponentId;
//!
//! # fn example() -> std::result::Result<(), String> {
//! let id = ComponentId::new("c12345")?;
//! assert_eq!(id.as_str(), "C12345");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod models;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{InputError, PartexError, ServiceError};
pub use ids::ComponentId;
pub use models::{
    ArtifactKind, ExportOptions, ExportRequest, ExportResultItem, ExportedFile, PersistedOptions,
    PersistedSettings,
};
pub use result::Result;
