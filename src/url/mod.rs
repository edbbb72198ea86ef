//! URL handling for robots.txt resolution
//!
//! This module builds the robots.txt location for a host and extracts the
//! path-and-query form that exclusion rules are stored and matched in.

use crate::{UrlError, UrlResult};
use url::Url;

/// Builds the robots.txt URL for a host
///
/// The host may carry a port (`example.com:8080`). The scheme is always `http`.
///
/// # Examples
///
/// ```
/// use robots_resolver::url::robots_url;
///
/// let url = robots_url("Example.com").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/robots.txt");
/// ```
pub fn robots_url(host: &str) -> UrlResult<Url> {
    let host = host.trim();
    if host.is_empty() {
        return Err(UrlError::MissingHost);
    }

    let url = Url::parse(&format!("http://{}/robots.txt", host))
        .map_err(|e| UrlError::Parse(format!("'{}': {}", host, e)))?;

    // Reject hosts that smuggle in a path, query or credentials
    if url.path() != "/robots.txt"
        || url.query().is_some()
        || url.fragment().is_some()
        || !url.username().is_empty()
        || url.password().is_some()
    {
        return Err(UrlError::Parse(format!("'{}' is not a bare host", host)));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Returns the path-and-query component of a URL
///
/// The query keeps its leading `?`; the fragment is dropped.
pub fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

/// Resolves a reference against a base URL and returns its path-and-query
///
/// Absolute references are accepted as-is; only their path-and-query is kept.
pub fn resolve_path_and_query(base: &Url, reference: &str) -> UrlResult<String> {
    let resolved = base.join(reference).map_err(|e| UrlError::Resolve {
        base: base.to_string(),
        reference: reference.to_string(),
        message: e.to_string(),
    })?;

    if resolved.cannot_be_a_base() {
        return Err(UrlError::Resolve {
            base: base.to_string(),
            reference: reference.to_string(),
            message: "resolved URL has no hierarchical path".to_string(),
        });
    }

    Ok(path_and_query(&resolved))
}
