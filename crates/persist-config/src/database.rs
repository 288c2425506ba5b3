//! libSQL database configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    ".persist/persist.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file. Ignored when a remote URL and token are set.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://workouts-me.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Check if a remote database is configured.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Reject a half-configured remote (URL without token or the reverse).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when exactly one of `url` and
    /// `auth_token` is set, and `ConfigError::InvalidValue` for an empty path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() != self.auth_token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".to_string(),
            });
        }
        if !self.is_remote() && self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".to_string(),
                reason: "path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
