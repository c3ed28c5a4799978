//! HTTP implementation of the export service seam
//!
//! Speaks the service's JSON API over reqwest. All transport and protocol
//! failures are mapped into [`ServiceError`] variants before they leave
//! this module; no reqwest types cross the seam.
//!
//! No automatic retries: a failed submission is reported and the user
//! resubmits.

use crate::adapters::service::models::{
    ConfigEnvelope, ErrorBody, ExportEnvelope, ParseBomEnvelope,
};
use crate::adapters::service::traits::ExportService;
use crate::config::ServiceConfig;
use crate::domain::{
    ExportRequest, ExportResultItem, PartexError, PersistedSettings, Result, ServiceError,
};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;

/// HTTP client for the export service
///
/// # Example
///
/// ```no_run
/// use partex::adapters::service::HttpExportService;
/// use partex::config::ServiceConfig;
///
/// # fn example() -> partex::domain::Result<()> {
/// let config = ServiceConfig::default();
/// let service = HttpExportService::new(&config)?;
/// # Ok(())
/// # }
/// ```
pub struct HttpExportService {
    /// Base URL of the export service, without a trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,
}

impl HttpExportService {
    /// Create a new service client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| {
                PartexError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The service base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Maps a non-2xx response into a service error
///
/// Tries the structured `{error}` body first; when the body is not
/// parseable the status code is surfaced verbatim.
fn http_error(status: StatusCode, body: &str) -> ServiceError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    ServiceError::Http {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ExportService for HttpExportService {
    async fn fetch_settings(&self) -> Result<Option<PersistedSettings>> {
        let url = self.endpoint("/api/config");
        tracing::debug!(url = %url, "Fetching persisted settings");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(http_error(status, &body).into());
        }

        let envelope: ConfigEnvelope = serde_json::from_str(&body)
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        // Absent success or config means "no prior settings", not an error.
        if !envelope.success {
            return Ok(None);
        }
        Ok(envelope.config)
    }

    async fn export_batch(&self, request: &ExportRequest) -> Result<Vec<ExportResultItem>> {
        let url = self.endpoint("/api/export");
        tracing::debug!(
            url = %url,
            count = request.component_ids.len(),
            "Submitting batch export request"
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(http_error(status, &body).into());
        }

        let envelope: ExportEnvelope = serde_json::from_str(&body)
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| "export failed without detail".to_string());
            return Err(ServiceError::Rejected(message).into());
        }

        Ok(envelope.results.unwrap_or_default())
    }

    async fn parse_bom(&self, file_name: &str, content: Vec<u8>) -> Result<Vec<String>> {
        let url = self.endpoint("/api/parse-bom");
        tracing::debug!(url = %url, file = %file_name, "Uploading BOM for parsing");

        let part = reqwest::multipart::Part::bytes(content).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("bom_file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(http_error(status, &body).into());
        }

        let envelope: ParseBomEnvelope = serde_json::from_str(&body)
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| "BOM parsing failed without detail".to_string());
            return Err(ServiceError::Rejected(message).into());
        }

        Ok(envelope.component_ids.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ServiceConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..Default::default()
        };
        let service = HttpExportService::new(&config).unwrap();
        assert_eq!(service.base_url(), "http://localhost:8000");
        assert_eq!(
            service.endpoint("/api/export"),
            "http://localhost:8000/api/export"
        );
    }

    #[test]
    fn test_http_error_prefers_structured_body() {
        let err = http_error(StatusCode::BAD_REQUEST, r#"{"error": "missing ids"}"#);
        match err {
            ServiceError::Http { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "missing ids");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_error_falls_back_to_status_code() {
        let err = http_error(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        match err {
            ServiceError::Http { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "HTTP 502");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_error_body_without_error_field_falls_back() {
        let err = http_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail": "x"}"#);
        match err {
            ServiceError::Http { message, .. } => assert_eq!(message, "HTTP 500"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
