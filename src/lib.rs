//! Robots-resolver: per-host robots.txt exclusion for crawlers
//!
//! This crate fetches a host's robots.txt, keeps the `Disallow` prefixes that apply
//! to the crawler's identity, and answers "is this URL excluded?" for that host.
//! Every failure to obtain the document degrades to "nothing is excluded".

pub mod config;
pub mod robots;
pub mod transport;
pub mod url;

use thiserror::Error;

/// Main error type for robots-resolver operations
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Failures reported by a transport while retrieving a robots.txt document
///
/// The resolver treats every variant the same way: the host is unrestricted.
/// `Other` covers failures that happen before a request is sent.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}")]
    Connect { url: String },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Transport failure for {url}: {message}")]
    Other { url: String, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host")]
    MissingHost,

    #[error("Cannot resolve '{reference}' against {base}: {message}")]
    Resolve {
        base: String,
        reference: String,
        message: String,
    },
}

/// Result type alias for robots-resolver operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use robots::{ExclusionRules, HostPolicy, LoadStatus, PolicyCache, RobotsResolver};
pub use transport::{HttpTransport, RobotsTransport};
