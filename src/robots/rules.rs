//! Exclusion rule storage and matching

use std::collections::HashSet;

/// Ordered set of disallowed path-and-query prefixes
///
/// Insertion order is kept for display; duplicates are suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionRules {
    prefixes: Vec<String>,
    seen: HashSet<String>,
}

impl ExclusionRules {
    /// Creates an empty rule set, which excludes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prefix, returning `false` if it was already present
    pub fn insert(&mut self, prefix: String) -> bool {
        if self.seen.contains(&prefix) {
            return false;
        }
        self.seen.insert(prefix.clone());
        self.prefixes.push(prefix);
        true
    }

    /// Returns true if `path_and_query` starts with any stored prefix
    ///
    /// Comparison is byte-for-byte and case-sensitive.
    pub fn matches(&self, path_and_query: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| path_and_query.starts_with(prefix.as_str()))
    }

    /// Read-only view of the prefixes in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.prefixes.iter()
    }
}

impl<'a> IntoIterator for &'a ExclusionRules {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
