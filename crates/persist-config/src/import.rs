//! Import input limits.

use serde::{Deserialize, Serialize};

/// 10 MiB.
const fn default_max_file_bytes() -> u64 {
    10 * 1024 * 1024
}

const fn default_max_json_nodes() -> u64 {
    200_000
}

fn default_blocklist() -> Vec<String> {
    ["<script", "javascript:", "eval(", "data:text/html", ";base64,"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportConfig {
    /// Largest accepted import file, in bytes.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    /// Largest accepted number of JSON nodes (objects, arrays, and scalars).
    #[serde(default = "default_max_json_nodes")]
    pub max_json_nodes: u64,

    /// Substrings rejected anywhere in the raw file, matched case-insensitively.
    #[serde(default = "default_blocklist")]
    pub blocklist: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
            max_json_nodes: default_max_json_nodes(),
            blocklist: default_blocklist(),
        }
    }
}
