//! HTTP transport implementation
//!
//! This module handles the robots.txt request for the resolver, including:
//! - Building the HTTP client from the fetch configuration
//! - Sending the crawler identity as the user agent
//! - Error classification
//! - Latin-1 body decoding

use crate::config::FetchConfig;
use crate::transport::RobotsTransport;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// No default user agent is set; the identity is attached per request.
///
/// # Example
///
/// ```no_run
/// use robots_resolver::config::FetchConfig;
/// use robots_resolver::transport::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let redirect = if config.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(config.max_redirects)
    };

    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// UTF-8 byte-order mark, written by some editors at the start of the file
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes bytes as ISO-8859-1, mapping each byte to the char of the same value
///
/// A leading UTF-8 byte-order mark is dropped.
pub fn decode_latin1(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// reqwest-backed [`RobotsTransport`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport from the fetch configuration
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RobotsTransport for HttpTransport {
    async fn fetch_text(&self, url: &Url, identity: Option<&str>) -> Result<String, FetchError> {
        let mut request = self.client.get(url.clone());
        if let Some(identity) = identity {
            let value = HeaderValue::from_str(identity).map_err(|e| FetchError::Other {
                url: url.to_string(),
                message: format!("invalid user agent '{}': {}", identity, e),
            })?;
            request = request.header(USER_AGENT, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_error(url, e))?;

        Ok(decode_latin1(&body))
    }
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect { url }
    } else {
        FetchError::Http { url, source: error }
    }
}
