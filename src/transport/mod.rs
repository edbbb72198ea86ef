//! Transport used to retrieve robots.txt documents
//!
//! The resolver depends only on [`RobotsTransport`]; [`HttpTransport`] is the
//! reqwest-backed implementation used by the crawler.

mod http;

pub use http::{build_http_client, decode_latin1, HttpTransport};

use crate::FetchError;
use async_trait::async_trait;
use url::Url;

/// Fetches a document and returns its body as text
///
/// Implementations send `identity` as the `User-Agent` header when present and
/// report any non-success outcome as a [`FetchError`].
#[async_trait]
pub trait RobotsTransport: Send + Sync {
    async fn fetch_text(&self, url: &Url, identity: Option<&str>) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: RobotsTransport + ?Sized> RobotsTransport for std::sync::Arc<T> {
    async fn fetch_text(&self, url: &Url, identity: Option<&str>) -> Result<String, FetchError> {
        (**self).fetch_text(url, identity).await
    }
}
