//! Per-host robots.txt policy
//!
//! A [`HostPolicy`] is the immutable result of loading one host's robots.txt.
//! It records where the document came from, which identity it was resolved
//! for, and whether the document could be fetched at all.

use crate::robots::ExclusionRules;
use crate::url::{path_and_query, resolve_path_and_query};
use chrono::{DateTime, Duration, Utc};
use url::Url;

/// Outcome of fetching a host's robots.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The document was fetched and parsed (it may still yield no rules)
    Parsed,
    /// The document could not be fetched; the host is treated as unrestricted
    Unreachable { reason: String },
}

/// Exclusion policy for a single host
#[derive(Debug, Clone)]
pub struct HostPolicy {
    host: String,
    document_url: Option<Url>,
    identity: Option<String>,
    rules: ExclusionRules,
    status: LoadStatus,
    fetched_at: DateTime<Utc>,
}

impl HostPolicy {
    /// Creates a policy from a successfully parsed document
    pub fn parsed(
        host: &str,
        document_url: Url,
        identity: Option<&str>,
        rules: ExclusionRules,
    ) -> Self {
        Self {
            host: host.to_string(),
            document_url: Some(document_url),
            identity: identity.map(str::to_string),
            rules,
            status: LoadStatus::Parsed,
            fetched_at: Utc::now(),
        }
    }

    /// Creates an unrestricted policy for a host whose document was unavailable
    ///
    /// `document_url` is `None` when the host could not form a valid URL.
    pub fn unreachable(
        host: &str,
        document_url: Option<Url>,
        identity: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            host: host.to_string(),
            document_url,
            identity: identity.map(str::to_string),
            rules: ExclusionRules::new(),
            status: LoadStatus::Unreachable {
                reason: reason.into(),
            },
            fetched_at: Utc::now(),
        }
    }

    /// Checks whether a URL is excluded for this host
    ///
    /// # Examples
    ///
    /// ```
    /// use robots_resolver::robots::{parse_document, HostPolicy};
    /// use url::Url;
    ///
    /// let doc = Url::parse("http://example.com/robots.txt").unwrap();
    /// let rules = parse_document("User-agent: *\nDisallow: /private", &doc, None);
    /// let policy = HostPolicy::parsed("example.com", doc, None, rules);
    ///
    /// let url = Url::parse("http://example.com/private/page").unwrap();
    /// assert!(policy.is_excluded(&url));
    /// ```
    pub fn is_excluded(&self, url: &Url) -> bool {
        self.rules.matches(&path_and_query(url))
    }

    /// Checks whether a path-and-query (e.g. `/a b?q=1`) is excluded
    ///
    /// The path is resolved against the document URL first, so it is
    /// percent-encoded the same way the stored rules are.
    pub fn is_path_excluded(&self, path_and_query: &str) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        match self
            .document_url
            .as_ref()
            .map(|base| resolve_path_and_query(base, path_and_query))
        {
            Some(Ok(normalized)) => self.rules.matches(&normalized),
            _ => self.rules.matches(path_and_query),
        }
    }

    /// The host this policy was loaded for
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The robots.txt URL, if the host formed a valid one
    pub fn document_url(&self) -> Option<&Url> {
        self.document_url.as_ref()
    }

    /// The identity the rules were resolved for
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Read-only view of the exclusion rules
    pub fn rules(&self) -> &ExclusionRules {
        &self.rules
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Returns true if the document was unavailable
    pub fn is_unreachable(&self) -> bool {
        matches!(self.status, LoadStatus::Unreachable { .. })
    }

    /// When the document was fetched (or the fetch attempted)
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Returns how long ago the policy was loaded
    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }

    /// Checks if the policy is older than `refresh` and should be loaded again
    pub fn is_stale(&self, refresh: Duration) -> bool {
        self.age() > refresh
    }
}
