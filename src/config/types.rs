use serde::{Deserialize, Serialize};

use crate::ui::filter::SearchScope;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Remote product API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection endpoint; item URLs are `{collection_url}/{id}`.
    #[serde(default = "default_collection_url")]
    pub collection_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Free-text search settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Which product fields the search text is matched against.
    #[serde(default)]
    pub scope: SearchScope,
}

fn default_collection_url() -> String {
    "https://localhost:7194/api/product".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            collection_url: default_collection_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}
