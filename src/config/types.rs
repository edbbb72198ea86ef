use serde::Deserialize;

/// Main configuration structure for robots-resolver
///
/// Every section is optional; missing sections take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Crawler identity used for `User-agent` matching and the request header
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityConfig {
    /// Name the crawler advertises; `None` matches only `User-agent: *` groups
    #[serde(rename = "crawler-name", default)]
    pub crawler_name: Option<String>,
}

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(
        rename = "connect-timeout-secs",
        default = "default_connect_timeout_secs"
    )]
    pub connect_timeout_secs: u64,

    /// Maximum redirects followed for robots.txt; 0 disables redirects
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: usize,
}

/// Host policy cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Age after which a loaded policy should be fetched again (hours)
    #[serde(rename = "refresh-hours", default = "default_refresh_hours")]
    pub refresh_hours: i64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_redirects() -> usize {
    10
}

fn default_refresh_hours() -> i64 {
    24
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_redirects: default_max_redirects(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            refresh_hours: default_refresh_hours(),
        }
    }
}

impl Config {
    /// Returns the configured crawler identity, if any
    pub fn identity(&self) -> Option<&str> {
        self.identity.crawler_name.as_deref()
    }

    /// Returns the policy refresh interval as a chrono duration
    pub fn refresh_interval(&self) -> chrono::Duration {
        chrono::Duration::hours(self.cache.refresh_hours)
    }
}
