//! Host policy caching
//!
//! Crawlers that move between hosts keep one [`HostPolicy`] per host here and
//! reload it once it is older than the refresh interval.

use crate::robots::HostPolicy;
use chrono::Duration;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Host-keyed store of loaded policies
#[derive(Debug, Clone)]
pub struct PolicyCache {
    policies: HashMap<String, HostPolicy>,
    refresh: Duration,
}

impl PolicyCache {
    /// Creates an empty cache whose entries go stale after `refresh`
    pub fn new(refresh: Duration) -> Self {
        Self {
            policies: HashMap::new(),
            refresh,
        }
    }

    /// Returns the cached policy for `host` unless it is missing or stale
    pub fn get_fresh(&self, host: &str) -> Option<&HostPolicy> {
        self.policies
            .get(&cache_key(host))
            .filter(|policy| !policy.is_stale(self.refresh))
    }

    /// Stores a policy, replacing any previous one for the same host
    pub fn insert(&mut self, policy: HostPolicy) -> Option<HostPolicy> {
        self.policies.insert(cache_key(policy.host()), policy)
    }

    pub fn remove(&mut self, host: &str) -> Option<HostPolicy> {
        self.policies.remove(&cache_key(host))
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Entry for `host`, for callers that load on a miss
    pub(crate) fn entry(&mut self, host: &str) -> Entry<'_, String, HostPolicy> {
        self.policies.entry(cache_key(host))
    }

    /// The interval after which entries are considered stale
    pub fn refresh(&self) -> Duration {
        self.refresh
    }
}

impl Default for PolicyCache {
    fn default() -> Self {
        Self::new(Duration::hours(24))
    }
}

fn cache_key(host: &str) -> String {
    host.trim().to_lowercase()
}
