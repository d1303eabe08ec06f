//! HTTP client and fetcher

use crate::config::FetchConfig;
use crate::fetch::cache::PageCache;
use crate::{PepscanError, Result};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Retrieves page bodies, transparently serving repeat requests from the
/// cache when one is configured.
///
/// Callers see only `fetch(url) -> body`; whether the body came from the
/// network or the cache is this type's concern alone.
pub struct Fetcher {
    client: Client,
    cache: Option<PageCache>,
}

impl Fetcher {
    /// Creates a fetcher from the fetch configuration, opening the page
    /// cache when enabled.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = build_http_client(config)?;

        let cache = if config.use_cache {
            Some(PageCache::open(Path::new(&config.cache_path))?)
        } else {
            None
        };

        Ok(Self { client, cache })
    }

    /// Creates a fetcher with an explicit cache (or none).
    pub fn with_cache(client: Client, cache: Option<PageCache>) -> Self {
        Self { client, cache }
    }

    /// Drops every cached page, returning how many were removed.
    ///
    /// A no-op returning zero when caching is disabled.
    pub fn clear_cache(&self) -> Result<u64> {
        match &self.cache {
            Some(cache) => cache.clear(),
            None => Ok(0),
        }
    }

    /// Fetches a page body.
    ///
    /// Non-success HTTP statuses are fetch errors; transport failures carry
    /// the originating URL. Successful bodies are written through to the
    /// cache before being returned.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(url.as_str())? {
                tracing::debug!("Cache hit for {}", url);
                return Ok(body);
            }
        }

        tracing::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| PepscanError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PepscanError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| PepscanError::Http {
            url: url.to_string(),
            source,
        })?;

        if let Some(cache) = &self.cache {
            cache.put(url.as_str(), &body)?;
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config() -> FetchConfig {
        FetchConfig {
            cache_path: String::new(),
            use_cache: false,
            timeout_secs: 5,
            user_agent: "pepscan-test/0".to_string(),
        }
    }

    fn uncached_fetcher() -> Fetcher {
        let client = build_http_client(&create_test_config()).unwrap();
        Fetcher::with_cache(client, None)
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let fetcher = uncached_fetcher();
        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();

        let body = fetcher.fetch(&url).await.unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn test_fetch_maps_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = uncached_fetcher();
        let url = Url::parse(&format!("{}/missing", server.uri())).unwrap();

        let result = fetcher.fetch(&url).await;
        assert!(matches!(
            result,
            Err(PepscanError::Fetch { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("cached body"))
            .expect(1)
            .mount(&server)
            .await;

        let client = build_http_client(&create_test_config()).unwrap();
        let cache = PageCache::open_in_memory().unwrap();
        let fetcher = Fetcher::with_cache(client, Some(cache));

        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();
        assert_eq!(fetcher.fetch(&url).await.unwrap(), "cached body");
        assert_eq!(fetcher.fetch(&url).await.unwrap(), "cached body");
    }

    #[tokio::test]
    async fn test_error_responses_are_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let client = build_http_client(&create_test_config()).unwrap();
        let cache = PageCache::open_in_memory().unwrap();
        let fetcher = Fetcher::with_cache(client, Some(cache));

        let url = Url::parse(&format!("{}/flaky", server.uri())).unwrap();
        assert!(fetcher.fetch(&url).await.is_err());
        assert!(fetcher.fetch(&url).await.is_err());
    }
}
