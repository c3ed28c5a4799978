//! Integration tests for BOM import
//!
//! The extension gate runs locally; everything past it goes through the
//! real HTTP adapter against a mock parse endpoint.

use partex::adapters::service::HttpExportService;
use partex::config::ServiceConfig;
use partex::core::bom;
use partex::core::registry::IdentifierRegistry;
use partex::domain::{InputError, PartexError, ServiceError};
use std::io::Write;

fn service_for(url: &str) -> HttpExportService {
    let config = ServiceConfig {
        base_url: url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 5,
    };
    HttpExportService::new(&config).unwrap()
}

fn bom_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[tokio::test]
async fn txt_upload_rejected_locally_before_any_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/parse-bom")
        .expect(0)
        .create_async()
        .await;

    let service = service_for(&server.url());
    let mut registry = IdentifierRegistry::new();
    let file = bom_file(".txt", "C12345\n");

    let result = bom::import(&service, &mut registry, file.path()).await;

    assert!(matches!(
        result,
        Err(PartexError::Input(InputError::UnsupportedFileType(_)))
    ));
    assert!(registry.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn csv_upload_reaches_parse_endpoint_and_fills_registry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/parse-bom")
        .match_header(
            "content-type",
            mockito::Matcher::Regex("multipart/form-data.*".to_string()),
        )
        .with_status(200)
        .with_body(r#"{"success": true, "component_ids": ["C12345", "C67890", "nope"]}"#)
        .expect(1)
        .create_async()
        .await;

    let service = service_for(&server.url());
    let mut registry = IdentifierRegistry::new();
    let file = bom_file(".csv", "Part Number\nC12345\nC67890\n");

    let outcome = bom::import(&service, &mut registry, file.path())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(outcome.found, 3);
    assert_eq!(outcome.added, 2);
    assert_eq!(outcome.invalid, 1);
    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn parse_failure_is_reported_with_service_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/parse-bom")
        .with_status(200)
        .with_body(r#"{"success": false, "error": "no identifier column found"}"#)
        .create_async()
        .await;

    let service = service_for(&server.url());
    let mut registry = IdentifierRegistry::new();
    let file = bom_file(".xlsx", "binary-ish");

    let result = bom::import(&service, &mut registry, file.path()).await;

    match result {
        Err(PartexError::Service(ServiceError::Rejected(message))) => {
            assert_eq!(message, "no identifier column found");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(registry.is_empty());
}
