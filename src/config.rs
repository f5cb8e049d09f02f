//! Configuration handling for the wizard client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default name request API address
const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api/v1";

/// Default per-request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the API address
pub const API_URL_ENV: &str = "NAMEREQUEST_API_URL";

/// User configuration for the wizard client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WizardConfig {
    /// Base URL of the name request API
    pub api_url: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Address given on the command line; beats every other source
    #[serde(skip)]
    pub api_url_override: Option<String>,
}

impl WizardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ca", "namerequest", "namerequest")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: WizardConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        self.api_url_override = url;
        self
    }

    /// API address: command line, then environment, then file, then the built-in default
    pub fn api_url(&self) -> String {
        resolve_api_url(
            self.api_url_override.as_deref(),
            std::env::var(API_URL_ENV).ok().as_deref(),
            self.api_url.as_deref(),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

fn resolve_api_url(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [cli, env, file]
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("namerequest-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let config = WizardConfig::default();
        assert!(config.api_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_serialization() {
        let config = WizardConfig {
            api_url: Some("https://names.example.test/api/v1".to_string()),
            request_timeout_secs: Some(10),
            api_url_override: Some("http://ignored.test".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: WizardConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_url,
            Some("https://names.example.test/api/v1".to_string())
        );
        assert_eq!(parsed.request_timeout(), Duration::from_secs(10));
        // command line overrides are never written out
        assert!(!json.contains("ignored.test"));
        assert!(parsed.api_url_override.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: WizardConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"request_timeout_secs": 5, "unknown_field": "value"}"#;
        let parsed: WizardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.request_timeout_secs, Some(5));
    }

    #[test]
    fn test_load_from_missing_file_gives_default() {
        let config = WizardConfig::load_from(&scratch_path("missing")).unwrap();
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = scratch_path("present");
        fs::write(&path, r#"{"api_url": "http://file.test", "request_timeout_secs": 7}"#)
            .unwrap();

        let config = WizardConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://file.test"));
        assert_eq!(config.request_timeout(), Duration::from_secs(7));
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let path = scratch_path("malformed");
        fs::write(&path, "not json").unwrap();

        let result = WizardConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_command_line_beats_environment_and_file() {
        assert_eq!(
            resolve_api_url(
                Some("http://cli.test"),
                Some("http://env.test"),
                Some("http://file.test")
            ),
            "http://cli.test"
        );
        let config = WizardConfig {
            api_url: Some("http://file.test".to_string()),
            ..Default::default()
        }
        .with_api_url_override(Some("http://cli.test".to_string()));
        assert_eq!(config.api_url(), "http://cli.test");
    }

    #[test]
    fn test_environment_beats_file() {
        assert_eq!(
            resolve_api_url(None, Some("http://env.test"), Some("http://file.test")),
            "http://env.test"
        );
    }

    #[test]
    fn test_blank_sources_are_skipped() {
        assert_eq!(
            resolve_api_url(Some(""), Some("  "), Some("http://file.test")),
            "http://file.test"
        );
        assert_eq!(resolve_api_url(None, None, None), DEFAULT_API_URL);
    }
}
