//! Session mirror of remotely persisted settings
//!
//! Loaded once at controller start. Failures never surface to the user:
//! the cache silently degrades to built-in defaults.

use crate::adapters::service::ExportService;
use crate::domain::{ExportOptions, PersistedSettings};

/// How many previous identifiers the empty-input hint shows.
const HINT_SAMPLE: usize = 3;

/// Read-only mirror of the last-used export configuration
///
/// `last_component_ids` is exposed only as a placeholder hint for the
/// empty-input message; it is never injected into the registry as live
/// data.
#[derive(Debug, Default)]
pub struct SettingsCache {
    settings: Option<PersistedSettings>,
}

impl SettingsCache {
    /// Fetch the persisted settings once
    ///
    /// Transport failures, malformed responses and "no prior settings" all
    /// collapse into the defaults, logged at debug level only.
    pub async fn load(service: &dyn ExportService) -> Self {
        match service.fetch_settings().await {
            Ok(Some(settings)) => {
                tracing::debug!(
                    lib_name = %settings.output_lib_name,
                    "Restored persisted export settings"
                );
                Self {
                    settings: Some(settings),
                }
            }
            Ok(None) => {
                tracing::debug!("No prior settings on the export service");
                Self::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Settings load failed, using defaults");
                Self::default()
            }
        }
    }

    /// Construct a cache from already-known settings
    pub fn from_settings(settings: PersistedSettings) -> Self {
        Self {
            settings: Some(settings),
        }
    }

    /// Whether any remote settings were mirrored
    pub fn is_restored(&self) -> bool {
        self.settings.is_some()
    }

    /// Last-used export options; defaults when nothing was persisted
    ///
    /// Persisted booleans are enabled unless explicitly `false`.
    pub fn options(&self) -> ExportOptions {
        self.settings
            .as_ref()
            .map(|s| s.export_options.into())
            .unwrap_or_default()
    }

    /// Last-used output directory, if one was persisted and non-empty
    pub fn output_folder_path(&self) -> Option<&str> {
        self.settings
            .as_ref()
            .map(|s| s.output_folder_path.as_str())
            .filter(|path| !path.is_empty())
    }

    /// Last-used library name prefix, if one was persisted and non-empty
    pub fn output_lib_name(&self) -> Option<&str> {
        self.settings
            .as_ref()
            .map(|s| s.output_lib_name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// A short sample of previously exported identifiers for the
    /// empty-input hint
    pub fn placeholder_hint(&self) -> Option<String> {
        let ids = &self.settings.as_ref()?.last_component_ids;
        if ids.is_empty() {
            return None;
        }
        Some(
            ids.iter()
                .take(HINT_SAMPLE)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PersistedOptions;
    use crate::domain::{ExportRequest, ExportResultItem, PartexError, Result, ServiceError};
    use async_trait::async_trait;

    struct FakeService {
        response: Result<Option<PersistedSettings>>,
    }

    #[async_trait]
    impl ExportService for FakeService {
        async fn fetch_settings(&self) -> Result<Option<PersistedSettings>> {
            match &self.response {
                Ok(settings) => Ok(settings.clone()),
                Err(_) => Err(PartexError::Service(ServiceError::Transport(
                    "offline".to_string(),
                ))),
            }
        }

        async fn export_batch(&self, _: &ExportRequest) -> Result<Vec<ExportResultItem>> {
            unreachable!("settings tests never export")
        }

        async fn parse_bom(&self, _: &str, _: Vec<u8>) -> Result<Vec<String>> {
            unreachable!("settings tests never parse BOMs")
        }
    }

    fn sample_settings() -> PersistedSettings {
        PersistedSettings {
            output_folder_path: "/tmp/out".to_string(),
            output_lib_name: "mylib".to_string(),
            export_options: PersistedOptions {
                symbol: true,
                footprint: false,
                model3d: true,
            },
            last_component_ids: vec![
                "C11111".to_string(),
                "C22222".to_string(),
                "C33333".to_string(),
                "C44444".to_string(),
            ],
        }
    }

    #[tokio::test]
    async fn test_load_applies_persisted_settings() {
        let service = FakeService {
            response: Ok(Some(sample_settings())),
        };
        let cache = SettingsCache::load(&service).await;

        assert!(cache.is_restored());
        assert!(!cache.options().footprint);
        assert!(cache.options().symbol);
        assert_eq!(cache.output_folder_path(), Some("/tmp/out"));
        assert_eq!(cache.output_lib_name(), Some("mylib"));
    }

    #[tokio::test]
    async fn test_load_failure_falls_back_silently() {
        let service = FakeService {
            response: Err(PartexError::Other("ignored".to_string())),
        };
        let cache = SettingsCache::load(&service).await;

        assert!(!cache.is_restored());
        assert_eq!(cache.options(), ExportOptions::default());
        assert!(cache.output_folder_path().is_none());
        assert!(cache.placeholder_hint().is_none());
    }

    #[tokio::test]
    async fn test_no_prior_settings_is_defaults() {
        let service = FakeService { response: Ok(None) };
        let cache = SettingsCache::load(&service).await;
        assert!(!cache.is_restored());
        assert_eq!(cache.options(), ExportOptions::default());
    }

    #[test]
    fn test_placeholder_hint_samples_first_three() {
        let cache = SettingsCache::from_settings(sample_settings());
        assert_eq!(
            cache.placeholder_hint().as_deref(),
            Some("C11111, C22222, C33333")
        );
    }

    #[test]
    fn test_empty_persisted_fields_are_none() {
        let cache = SettingsCache::from_settings(PersistedSettings::default());
        assert!(cache.output_folder_path().is_none());
        assert!(cache.output_lib_name().is_none());
        assert!(cache.placeholder_hint().is_none());
    }
}
