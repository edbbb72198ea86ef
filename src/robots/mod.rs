//! Robots.txt handling module
//!
//! This module provides functionality for fetching and parsing robots.txt files
//! into per-host exclusion policies, and for caching those policies across hosts.
//!
//! # Example
//!
//! ```no_run
//! use robots_resolver::config::Config;
//! use robots_resolver::robots::RobotsResolver;
//! use url::Url;
//!
//! # async fn example() -> Result<(), robots_resolver::RobotsError> {
//! let resolver = RobotsResolver::from_config(&Config::default())?;
//! let policy = resolver.load_for_host("example.com", Some("MyBot")).await;
//!
//! let candidate = Url::parse("http://example.com/private/page").unwrap();
//! if !policy.is_excluded(&candidate) {
//!     // enqueue candidate
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
mod parser;
mod policy;
mod resolver;
mod rules;

pub use cache::PolicyCache;
pub use parser::{parse_document, RuleParser};
pub use policy::{HostPolicy, LoadStatus};
pub use resolver::RobotsResolver;
pub use rules::ExclusionRules;
