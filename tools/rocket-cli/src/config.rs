//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use rocket_store::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "ROCKET_API_URL";

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["rocket.toml", ".rocket.toml", "rocket.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shop service configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Cart storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply an override of the service URL, if any.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }
}

/// Shop service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog and stock service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Cart storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the stored slots.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Key prefix; the cart lives under `<namespace>:cart`.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_dir() -> String {
    ".rocket".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            namespace: default_namespace(),
        }
    }
}

/// Generate a default rocket.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# RocketShoes cart configuration

[api]
base_url = "{base_url}"
# timeout_secs = 10

[storage]
dir = "{dir}"
namespace = "{namespace}"
"#,
        base_url = default_base_url(),
        dir = default_dir(),
        namespace = default_namespace(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.api.timeout(), None);
        assert_eq!(config.storage.dir, ".rocket");
        assert_eq!(config.storage.namespace, "@RocketShoes");
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
[api]
timeout_secs = 5
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.storage.namespace, "@RocketShoes");
    }

    #[test]
    fn test_json_config() {
        let config: CliConfig =
            serde_json::from_str(r#"{"storage": {"namespace": "@Staging"}}"#).unwrap();
        assert_eq!(config.storage.namespace, "@Staging");
        assert_eq!(config.storage.dir, ".rocket");
    }

    #[test]
    fn test_api_url_override() {
        let config = CliConfig::default().with_api_url(Some(" http://shop.test ".into()));
        assert_eq!(config.api.base_url, "http://shop.test");

        let config = CliConfig::default().with_api_url(Some(String::new()));
        assert_eq!(config.api.base_url, "http://localhost:3333");

        let config = CliConfig::default().with_api_url(None);
        assert_eq!(config.api.base_url, "http://localhost:3333");
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("rocket.toml");
        std::fs::write(&toml_path, "[api]\ntimeout_secs = 3\n").unwrap();
        let json_path = dir.path().join("rocket.json");
        std::fs::write(&json_path, r#"{"storage": {"dir": "/var/lib/rocket"}}"#).unwrap();

        let loaded = CliConfig::load(toml_path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.api.timeout_secs, Some(3));
        let loaded = CliConfig::load(json_path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.storage.dir, "/var/lib/rocket");
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load("/nonexistent/rocket.toml").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }
}
