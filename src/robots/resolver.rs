//! Robots.txt resolution for a host
//!
//! The resolver fetches `http://{host}/robots.txt` through its transport and turns
//! the document into a [`HostPolicy`]. Loading never fails: an unreachable
//! document yields a policy that excludes nothing.

use crate::config::{load_config, Config};
use crate::robots::{parse_document, HostPolicy, PolicyCache};
use crate::transport::{HttpTransport, RobotsTransport};
use crate::url::robots_url;
use std::path::Path;
use std::collections::hash_map::Entry;

/// Loads per-host exclusion policies through a transport
#[derive(Debug, Clone)]
pub struct RobotsResolver<T> {
    transport: T,
}

impl RobotsResolver<HttpTransport> {
    /// Creates a resolver backed by an HTTP transport built from `config`
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        Ok(Self::new(HttpTransport::new(&config.fetch)?))
    }

    /// Loads a TOML configuration file and builds a resolver from it
    ///
    /// Returns the resolver together with the configuration, which carries the
    /// crawler identity and cache refresh interval.
    pub fn from_config_file(path: &Path) -> crate::Result<(Self, Config)> {
        let config = load_config(path)?;
        let resolver = Self::from_config(&config)?;
        Ok((resolver, config))
    }
}

impl<T: RobotsTransport> RobotsResolver<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches and parses the robots.txt of `host`
    ///
    /// # Arguments
    ///
    /// * `host` - Host name, optionally with a port (`example.com:8080`)
    /// * `identity` - Crawler identity, sent as the user agent and matched
    ///   against `User-agent` lines
    ///
    /// # Returns
    ///
    /// A fresh policy for the host. Any failure to obtain the document results
    /// in an unrestricted policy with [`LoadStatus::Unreachable`](crate::robots::LoadStatus).
    pub async fn load_for_host(&self, host: &str, identity: Option<&str>) -> HostPolicy {
        let document_url = match robots_url(host) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Cannot build robots.txt URL for '{}': {}", host, e);
                return HostPolicy::unreachable(host, None, identity, e.to_string());
            }
        };

        tracing::debug!("Fetching robots.txt: {}", document_url);
        let body = match self.transport.fetch_text(&document_url, identity).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("No robots.txt for {}: {}", host, e);
                return HostPolicy::unreachable(
                    host,
                    Some(document_url),
                    identity,
                    e.to_string(),
                );
            }
        };

        let rules = parse_document(&body, &document_url, identity);
        tracing::info!(
            "Loaded robots.txt for {} ({} exclusion rules)",
            host,
            rules.len()
        );

        HostPolicy::parsed(host, document_url, identity, rules)
    }

    /// Returns the cached policy for `host`, loading it if missing or stale
    ///
    /// A cached policy resolved for a different identity is also reloaded.
    pub async fn policy_for<'c>(
        &self,
        cache: &'c mut PolicyCache,
        host: &str,
        identity: Option<&str>,
    ) -> &'c HostPolicy {
        let refresh = cache.refresh();
        match cache.entry(host) {
            Entry::Occupied(entry)
                if !entry.get().is_stale(refresh) && entry.get().identity() == identity =>
            {
                tracing::debug!("Using cached robots.txt for {}", host);
                entry.into_mut()
            }
            Entry::Occupied(mut entry) => {
                entry.insert(self.load_for_host(host, identity).await);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(self.load_for_host(host, identity).await),
        }
    }
}
