//! Domain models for batch export
//!
//! Request and result types exchanged with the export service, plus the
//! remote-persisted settings mirror. Wire field names follow the service's
//! JSON contract (`componentIds`, `exportPath`, ...), so every struct here
//! carries explicit serde renames.

use crate::domain::ids::ComponentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Independently toggleable artifact kinds for one export run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Generate schematic symbols
    pub symbol: bool,

    /// Generate PCB footprints
    pub footprint: bool,

    /// Generate 3D models
    pub model3d: bool,
}

impl ExportOptions {
    /// True if at least one artifact kind is selected
    pub fn any(&self) -> bool {
        self.symbol || self.footprint || self.model3d
    }
}

impl Default for ExportOptions {
    /// All artifact kinds enabled, matching the service's own defaults.
    fn default() -> Self {
        Self {
            symbol: true,
            footprint: true,
            model3d: true,
        }
    }
}

/// Kind of a generated library artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Schematic symbol library entry
    Symbol,
    /// PCB footprint
    Footprint,
    /// 3D model (STEP/WRL)
    Model3d,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Symbol => "symbol",
            ArtifactKind::Footprint => "footprint",
            ArtifactKind::Model3d => "model3d",
        };
        write!(f, "{name}")
    }
}

/// One batch export request
///
/// Constructed fresh for each submission and immutable once sent. The
/// identifier list preserves registry order and is unique by construction
/// (the registry deduplicates on insert).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Ordered, unique component identifiers
    pub component_ids: Vec<ComponentId>,

    /// Artifact kinds to generate
    pub options: ExportOptions,

    /// Optional output directory override on the service side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<String>,

    /// Optional library file name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_prefix: Option<String>,
}

impl ExportRequest {
    /// Builds a request from the current registry contents and options
    pub fn new(
        component_ids: Vec<ComponentId>,
        options: ExportOptions,
        export_path: Option<String>,
        file_prefix: Option<String>,
    ) -> Self {
        Self {
            component_ids,
            options,
            export_path,
            file_prefix,
        }
    }
}

/// One generated file within a result item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFile {
    /// Artifact kind of the file
    #[serde(rename = "type")]
    pub kind: ArtifactKind,

    /// Path of the generated file on the service side
    pub path: String,
}

/// Per-identifier outcome of a batch export
///
/// A single identifier may yield zero, one, or multiple file entries
/// depending on which options succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResultItem {
    /// The identifier this outcome belongs to
    pub component_id: ComponentId,

    /// Whether the export of this identifier succeeded
    pub success: bool,

    /// Human-readable outcome message from the service
    #[serde(default)]
    pub message: String,

    /// Generated files, possibly empty
    #[serde(default)]
    pub files: Vec<ExportedFile>,
}

/// Remote-persisted export settings, mirrored read-only into the controller
///
/// Owned by the export service; the controller only ever reads it. Option
/// booleans default to enabled — only an explicit `false` disables one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersistedSettings {
    /// Last-used output directory
    #[serde(default)]
    pub output_folder_path: String,

    /// Last-used library name prefix
    #[serde(default)]
    pub output_lib_name: String,

    /// Last-used export option toggles
    #[serde(default)]
    pub export_options: PersistedOptions,

    /// Sample of previously exported identifiers, used only as a
    /// placeholder hint when the current input is empty
    #[serde(default)]
    pub last_component_ids: Vec<String>,
}

/// Persisted option toggles with enabled-unless-false semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedOptions {
    #[serde(default = "enabled")]
    pub symbol: bool,

    #[serde(default = "enabled")]
    pub footprint: bool,

    #[serde(default = "enabled")]
    pub model3d: bool,
}

fn enabled() -> bool {
    true
}

impl Default for PersistedOptions {
    fn default() -> Self {
        Self {
            symbol: true,
            footprint: true,
            model3d: true,
        }
    }
}

impl From<PersistedOptions> for ExportOptions {
    fn from(p: PersistedOptions) -> Self {
        Self {
            symbol: p.symbol,
            footprint: p.footprint,
            model3d: p.model3d,
        }
    }
}
