use serde::Deserialize;

/// Main configuration structure for Gnawer
///
/// Every section is optional in the TOML file; missing values fall back to
/// the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub fetch: FetchConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub collector: CollectorConfig,
}

/// Persistent store configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: "db/news.db".to_string(),
        }
    }
}

/// HTTP fetch deadlines
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total deadline for a single request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Deadline for establishing a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    pub name: String,
    pub version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// How relative `href` values found on a listing page are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkResolution {
    /// Join the href onto the task's link selector string, as gnawer always has
    #[default]
    Selector,
    /// Resolve the href against the listing page URL
    Page,
}

/// Article collection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Maximum number of article pages fetched at once for one HTML task
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: usize,

    #[serde(rename = "link-resolution")]
    pub link_resolution: LinkResolution,

    /// Line width used when rendering HTML to plain text
    #[serde(rename = "text-width")]
    pub text_width: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 4,
            link_resolution: LinkResolution::Selector,
            text_width: 100,
        }
    }
}
