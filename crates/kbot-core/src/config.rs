use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{KbotError, Result};

/// Top-level configuration for the kbot application.
///
/// Loaded from a TOML file. Each section corresponds to one external
/// collaborator the engine is wired to at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KbotConfig {
    #[serde(default)]
    pub search: SearchServiceConfig,
    #[serde(default)]
    pub state: StateStoreConfig,
}

impl KbotConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: KbotConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| KbotError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Check that every collaborator setting the engine needs is present.
    ///
    /// Missing values are startup-fatal: the engine must not be constructed
    /// against a half-configured search service or state store.
    pub fn validate(&self) -> Result<()> {
        if self.search.endpoint.is_empty() {
            return Err(KbotError::Config(
                "search.endpoint is required".to_string(),
            ));
        }
        if self.search.index.is_empty() {
            return Err(KbotError::Config("search.index is required".to_string()));
        }
        if self.search.api_key.is_empty() {
            return Err(KbotError::Config("search.api_key is required".to_string()));
        }
        if self.state.connection.is_empty() {
            return Err(KbotError::Config(
                "state.connection is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Connection settings for the hosted full-text search index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchServiceConfig {
    /// Base URL of the search service, e.g. `https://acme.search.windows.net`.
    pub endpoint: String,
    /// Name of the knowledge-base index to query.
    pub index: String,
    /// Query credential sent as the `api-key` header.
    pub api_key: String,
    /// REST API version string appended to every request.
    pub api_version: String,
    /// Request timeout in seconds for the one outbound search call.
    pub timeout_secs: u64,
}

impl Default for SearchServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            index: String::new(),
            api_key: String::new(),
            api_version: "2020-06-30".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Connection settings for the conversation state store.
///
/// The in-process store does not open a connection today, but presence is
/// still validated so swapping in an external store is a config-only change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateStoreConfig {
    /// Store connection string. `memory` selects the in-process store.
    pub connection: String,
}

impl Default for StateStoreConfig {
    fn default() -> Self {
        Self {
            connection: "memory".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn valid_config() -> KbotConfig {
        KbotConfig {
            search: SearchServiceConfig {
                endpoint: "https://acme.search.windows.net".to_string(),
                index: "techkb".to_string(),
                api_key: "secret".to_string(),
                ..SearchServiceConfig::default()
            },
            state: StateStoreConfig::default(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = KbotConfig::default();
        assert!(config.search.endpoint.is_empty());
        assert!(config.search.index.is_empty());
        assert_eq!(config.search.api_version, "2020-06-30");
        assert_eq!(config.search.timeout_secs, 10);
        assert_eq!(config.state.connection, "memory");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[search]
endpoint = "https://acme.search.windows.net"
index = "techkb"
api_key = "abc123"
api_version = "2021-04-30-Preview"
timeout_secs = 5

[state]
connection = "memory"
"#;
        let file = create_temp_config(content);
        let config = KbotConfig::load(file.path()).unwrap();
        assert_eq!(config.search.endpoint, "https://acme.search.windows.net");
        assert_eq!(config.search.index, "techkb");
        assert_eq!(config.search.api_key, "abc123");
        assert_eq!(config.search.api_version, "2021-04-30-Preview");
        assert_eq!(config.search.timeout_secs, 5);
        assert_eq!(config.state.connection, "memory");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[search]
endpoint = "https://acme.search.windows.net"
"#;
        let file = create_temp_config(content);
        let config = KbotConfig::load(file.path()).unwrap();
        assert_eq!(config.search.endpoint, "https://acme.search.windows.net");
        // Remaining fields use defaults
        assert_eq!(config.search.api_version, "2020-06-30");
        assert_eq!(config.state.connection, "memory");
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "this is {{ not valid TOML";
        let file = create_temp_config(content);
        let result = KbotConfig::load(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = KbotConfig::load_or_default(Path::new("/nonexistent/kbot.toml"));
        assert_eq!(config.state.connection, "memory");
        assert!(config.search.endpoint.is_empty());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = KbotConfig::load(file.path()).unwrap();
        assert_eq!(config.search.timeout_secs, 10);
        assert_eq!(config.state.connection, "memory");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kbot.toml");

        let config = valid_config();
        config.save(&path).unwrap();

        let reloaded = KbotConfig::load(&path).unwrap();
        assert_eq!(reloaded.search.endpoint, config.search.endpoint);
        assert_eq!(reloaded.search.index, config.search.index);
        assert_eq!(reloaded.state.connection, config.state.connection);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("kbot.toml");

        valid_config().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = valid_config();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let deserialized: KbotConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.search.api_key, config.search.api_key);
        assert_eq!(deserialized.search.timeout_secs, config.search.timeout_secs);
    }

    // ---- Validation ----

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let mut config = valid_config();
        config.search.endpoint = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search.endpoint"));
    }

    #[test]
    fn test_validate_rejects_empty_index() {
        let mut config = valid_config();
        config.search.index = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search.index"));
    }

    #[test]
    fn test_validate_rejects_empty_api_key() {
        let mut config = valid_config();
        config.search.api_key = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search.api_key"));
    }

    #[test]
    fn test_validate_rejects_empty_state_connection() {
        let mut config = valid_config();
        config.state.connection = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("state.connection"));
    }

    #[test]
    fn test_validate_default_config_fails() {
        // Defaults leave the search section empty, which is startup-fatal.
        assert!(KbotConfig::default().validate().is_err());
    }
}
