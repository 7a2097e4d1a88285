//! HTTP document fetching
//!
//! One reqwest client wraps all page fetches. An optional session cookie is
//! handed in at construction and attached to every request, so sites can
//! serve login-gated contest pages; core code never reads the environment
//! for it.

use crate::{ConfigError, KataError, Result};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP fetcher for contest-site documents
pub struct DocumentFetcher {
    client: Client,
}

impl DocumentFetcher {
    /// Builds a fetcher, attaching `session` as a `Cookie` header when given
    ///
    /// The cookie string is passed verbatim, e.g. `REVEL_SESSION=...` for
    /// AtCoder. No timeout is configured: a crawl waits as long as the site
    /// does.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kata::crawler::DocumentFetcher;
    ///
    /// let anonymous = DocumentFetcher::new(None).unwrap();
    /// let logged_in = DocumentFetcher::new(Some("REVEL_SESSION=abc123")).unwrap();
    /// ```
    pub fn new(session: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = session {
            let value = HeaderValue::from_str(cookie).map_err(|e| {
                ConfigError::Validation(format!("session cookie is not a valid header value: {}", e))
            })?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(Policy::limited(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches a URL and returns the response body
    ///
    /// # Errors
    ///
    /// Network failures and non-success status codes both surface as
    /// [`KataError::Fetch`].
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| KataError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let response = response
            .error_for_status()
            .map_err(|source| KataError::Fetch {
                url: url.to_string(),
                source,
            })?;

        response.text().await.map_err(|source| KataError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}
