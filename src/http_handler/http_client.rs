use super::http_response::response_common::{ResponseError, unwrap_return_code};
use super::response_cache::ResponseCache;
use chrono::{TimeDelta, Utc};

/// Source of raw endpoint bodies.
///
/// `HTTPClient` is the production implementation; the seam exists so the render
/// pipeline can be driven without a network.
#[async_trait::async_trait]
pub(crate) trait Fetch: Send + Sync {
    /// Returns the raw body of `endpoint`.
    ///
    /// # Errors
    /// A `ResponseError` if the endpoint is unreachable, times out or answers with
    /// a non-success status.
    async fn fetch(&self, endpoint: &str) -> Result<String, ResponseError>;
}

/// A simple wrapper around `reqwest::Client` used to fetch the open-notify
/// endpoints relative to a preconfigured base URL.
///
/// Successful bodies are memoized per URL in a `ResponseCache` for the configured
/// time-to-live, so repeated page loads within that window do not hit upstream.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Time-bounded memo of successful bodies.
    cache: ResponseCache,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL, request timeout and
    /// cache lifetime.
    ///
    /// # Errors
    /// Fails if the TLS backend or resolver cannot be initialized.
    pub(crate) fn new(
        base_url: &str,
        timeout: std::time::Duration,
        cache_ttl: TimeDelta,
    ) -> Result<HTTPClient, ResponseError> {
        Ok(HTTPClient {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            base_url: String::from(base_url.trim_end_matches('/')),
            cache: ResponseCache::new(cache_ttl),
        })
    }

    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    /// Returns the lifetime of cached bodies.
    pub(crate) fn cache_ttl(&self) -> TimeDelta { self.cache.ttl() }

    fn endpoint_url(&self, endpoint: &str) -> String { format!("{}{endpoint}", self.base_url) }
}

#[async_trait::async_trait]
impl Fetch for HTTPClient {
    async fn fetch(&self, endpoint: &str) -> Result<String, ResponseError> {
        let url = self.endpoint_url(endpoint);
        if let Some(body) = self.cache.lookup(&url, Utc::now()).await {
            crate::event!("Cache hit for {url}");
            return Ok(body);
        }
        let response = self.client.get(&url).send().await?;
        let body = unwrap_return_code(response)?.text().await?;
        self.cache.store(&url, &body, Utc::now()).await;
        crate::event!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
