//! Settings shared by every command.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Rows returned by `persist programs` when `--limit` is not given.
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { default_limit: 20 }
    }
}
