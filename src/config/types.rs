use serde::{Deserialize, Serialize};

use crate::config::credentials::SecureString;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Content store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Project identifier on the content store (e.g., "x1y2z3").
    #[serde(default)]
    pub project_id: String,
    /// Dataset to query (default: "production").
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// Dated API version, without the leading `v` (default: "2025-04-01").
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Query through the edge cache host instead of the live API.
    #[serde(default = "default_use_cdn")]
    pub use_cdn: bool,
    /// Read token, sent as a bearer credential when present.
    #[serde(default, skip_serializing)]
    pub token: Option<SecureString>,
    /// Overrides the derived API host (scheme + host + port).
    #[serde(default)]
    pub api_host: Option<String>,
    /// Host serving image assets.
    #[serde(default = "default_image_host")]
    pub image_host: String,
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Endpoint used when the contact document does not provide one.
    #[serde(default = "default_fallback_endpoint")]
    pub fallback_endpoint: String,
}

/// HTTP client tuning shared by the content store and the form submitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Pool idle timeout in seconds (default: 90).
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout_seconds: u32,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// UI tick interval in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show every line immediately instead of staggered entrances.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Brand label shown in the navigation bar.
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Copyright line shown under the footer links.
    #[serde(default = "default_copyright")]
    pub copyright: String,
}

fn default_dataset() -> String {
    "production".to_string()
}

fn default_api_version() -> String {
    "2025-04-01".to_string()
}

fn default_use_cdn() -> bool {
    true
}

fn default_image_host() -> String {
    "https://cdn.sanity.io".to_string()
}

fn default_fallback_endpoint() -> String {
    "https://formspree.io/f/mwpolkno".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_pool_idle_timeout() -> u32 {
    90
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_brand() -> String {
    "Dave.codes".to_string()
}

fn default_copyright() -> String {
    "© 2025 Dave. All rights reserved.".to_string()
}

impl ContentConfig {
    /// Base URL queries are issued against, without a trailing slash.
    pub fn api_base(&self) -> String {
        match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => {
                let domain = if self.use_cdn {
                    "apicdn.sanity.io"
                } else {
                    "api.sanity.io"
                };
                format!("https://{}.{}", self.project_id, domain)
            }
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: default_use_cdn(),
            token: None,
            api_host: None,
            image_host: default_image_host(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            fallback_endpoint: default_fallback_endpoint(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connect_timeout(),
            pool_idle_timeout_seconds: default_pool_idle_timeout(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            reduced_motion: false,
            brand: default_brand(),
            copyright: default_copyright(),
        }
    }
}
