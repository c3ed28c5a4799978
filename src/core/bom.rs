//! BOM file import
//!
//! The file itself is parsed remotely; this module owns the local
//! extension gate, the upload, and feeding the parsed identifiers into
//! the registry.

use crate::adapters::service::ExportService;
use crate::core::registry::{EntrySource, IdentifierRegistry};
use crate::domain::{ComponentId, InputError, Result};
use std::path::Path;

/// Accepted BOM file extensions, matched case-insensitively by name suffix.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// Outcome of one BOM import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BomImportOutcome {
    /// Raw identifier strings the parser returned
    pub found: usize,

    /// Identifiers actually inserted into the registry
    pub added: usize,

    /// Strings that failed the identifier invariant and were dropped
    pub invalid: usize,
}

/// Checks the file extension before any upload happens
///
/// # Errors
///
/// Returns [`InputError::UnsupportedFileType`] for anything that is not
/// `.xlsx`, `.xls` or `.csv`.
pub fn validate_extension(file_name: &str) -> std::result::Result<(), InputError> {
    let extension = file_name.rsplit('.').next().unwrap_or("").to_lowercase();
    if file_name.contains('.') && SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(InputError::UnsupportedFileType(file_name.to_string()))
    }
}

/// Import identifiers from a BOM file into the registry
///
/// Rejects unsupported extensions locally, uploads the file for remote
/// parsing, validates the returned strings and bulk-adds the valid ones
/// (duplicates dropped silently by the registry).
pub async fn import(
    service: &dyn ExportService,
    registry: &mut IdentifierRegistry,
    path: &Path,
) -> Result<BomImportOutcome> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();

    validate_extension(&file_name)?;

    let content = tokio::fs::read(path).await?;
    let raw_ids = service.parse_bom(&file_name, content).await?;
    let found = raw_ids.len();

    let mut valid = Vec::new();
    for raw in raw_ids {
        match ComponentId::new(&raw) {
            Ok(id) => valid.push(id),
            Err(reason) => {
                tracing::warn!(candidate = %raw, reason = %reason, "Dropping invalid identifier from BOM");
            }
        }
    }

    let invalid = found - valid.len();
    let added = registry.add_bulk(valid, EntrySource::BomImport);

    tracing::info!(
        file = %file_name,
        found,
        added,
        invalid,
        "Imported identifiers from BOM"
    );

    Ok(BomImportOutcome {
        found,
        added,
        invalid,
    })
}
