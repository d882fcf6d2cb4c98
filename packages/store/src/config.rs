//! # Application configuration — `pressboard.toml`
//!
//! Defines the TOML configuration file the admin shell is built against
//! (filename: [`PressboardConfig::filename`] = `"pressboard.toml"`). It selects
//! which backend the API layer talks to and where the session token lives.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "/api/v1"    # REST backend base path
//! backend = "http"        # "http" or "fixture"
//!
//! [storage]
//! token_key = "auth_token"   # browser-storage key for the session token
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `pressboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PressboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// API backend selection and endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base path of the REST backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Which transport serves the domain services.
    #[serde(default)]
    pub backend: BackendKind,
}

/// Transport kind behind the single service interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Real REST backend over HTTP.
    #[default]
    Http,
    /// In-memory fixture double, seeded with demo data.
    Fixture,
}

/// Session token persistence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage key holding the bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_base_url() -> String {
    "/api/v1".to_string()
}

fn default_token_key() -> String {
    "auth_token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            backend: BackendKind::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl PressboardConfig {
    /// Builder method to select the fixture backend.
    pub fn with_fixture_backend(mut self) -> Self {
        self.api.backend = BackendKind::Fixture;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "pressboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default_config() {
        let config = PressboardConfig::from_toml("").unwrap();
        assert_eq!(config, PressboardConfig::default());
        assert_eq!(config.api.base_url, "/api/v1");
        assert_eq!(config.api.backend, BackendKind::Http);
        assert_eq!(config.storage.token_key, "auth_token");
    }

    #[test]
    fn toml_roundtrip() {
        let config = PressboardConfig::default().with_fixture_backend();
        let text = config.to_toml().unwrap();
        let loaded = PressboardConfig::from_toml(&text).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.api.backend, BackendKind::Fixture);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config = PressboardConfig::from_toml(
            "[api]\nbase_url = \"https://cms.example.com/api\"\n",
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://cms.example.com/api");
        assert_eq!(config.api.backend, BackendKind::Http);
        assert_eq!(config.storage.token_key, "auth_token");
    }
}
