//! Wire models for the export service API
//!
//! Response envelopes shared by the three endpoints. All carry a `success`
//! flag; the rest of the fields are optional and endpoint-specific.

use crate::domain::{ExportResultItem, PersistedSettings};
use serde::Deserialize;

/// `GET /api/config` response
#[derive(Debug, Deserialize)]
pub struct ConfigEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub config: Option<PersistedSettings>,
}

/// `POST /api/export` response
#[derive(Debug, Deserialize)]
pub struct ExportEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub results: Option<Vec<ExportResultItem>>,

    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/parse-bom` response
#[derive(Debug, Deserialize)]
pub struct ParseBomEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub component_ids: Option<Vec<String>>,

    #[serde(default)]
    pub error: Option<String>,
}

/// Structured error body some non-2xx responses carry
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_envelope_tolerates_missing_fields() {
        let envelope: ConfigEnvelope = serde_json::from_str("{}").unwrap();
        assert!(!envelope.success);
        assert!(envelope.config.is_none());
    }

    #[test]
    fn test_config_envelope_with_settings() {
        let raw = r#"{"success": true, "config": {"output_lib_name": "mylib"}}"#;
        let envelope: ConfigEnvelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.config.unwrap().output_lib_name, "mylib");
    }

    #[test]
    fn test_export_envelope_failure_shape() {
        let envelope: ExportEnvelope =
            serde_json::from_str(r#"{"success": false, "error": "bad id"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("bad id"));
        assert!(envelope.results.is_none());
    }

    #[test]
    fn test_parse_bom_envelope_ids() {
        let raw = r#"{"success": true, "component_ids": ["C12345", "junk"]}"#;
        let envelope: ParseBomEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.component_ids.unwrap().len(), 2);
    }

    #[test]
    fn test_error_body_parse() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("boom"));
    }
}
