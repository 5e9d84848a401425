//! HTTP client for GOG storefront requests using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::gog::models::PriceObservation;
use crate::gog::parser::{ExtractPrice, FinalAmountExtractor};
use crate::gog::regions::region_cookie;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;
use wreq::Client;
use wreq_util::Emulation;

const GOG_BASE: &str = "https://www.gog.com";

/// Trait for per-region price lookups - enables mocking for tests.
#[async_trait]
pub trait GogFetch: Send + Sync {
    /// Fetches the product page at `path` under `region` and extracts its
    /// displayed price. `Ok(None)` means the region has no priced listing;
    /// `Err` means the network call itself failed.
    async fn lookup(&self, path: &str, region: &str) -> Result<Option<PriceObservation>>;
}

/// GOG HTTP client with browser impersonation.
pub struct GogClient {
    client: Client,
    base_url: String,
    extractor: Box<dyn ExtractPrice>,
}

impl GogClient {
    /// Creates a new GOG client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a new GOG client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let mut builder = Client::builder().gzip(true).brotli(true);

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| GOG_BASE.to_string()),
            extractor: Box::new(FinalAmountExtractor),
        })
    }

    /// Replaces the price extraction rule (for testing alternate markup).
    pub fn with_extractor(mut self, extractor: Box<dyn ExtractPrice>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Performs the region-pinned GET and returns the raw HTML body.
    async fn fetch(&self, path: &str, region: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);

        debug!("GET {} ({})", url, region);

        let response = self
            .client
            .get(&url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Cookie", region_cookie(region))
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }
}

#[async_trait]
impl GogFetch for GogClient {
    async fn lookup(&self, path: &str, region: &str) -> Result<Option<PriceObservation>> {
        let html = self.fetch(path, region).await?;

        Ok(self
            .extractor
            .extract(&html)
            .map(|price| PriceObservation { country: region.to_string(), price }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn priced_page(amount: &str) -> String {
        format!(
            r#"<html><body>
                <span class="product-actions-price__final-amount">{}</span>
            </body></html>"#,
            amount
        )
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en/game/some_title"))
            .and(header("Cookie", "gog_lc=US_USD_en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_string(priced_page("59.99")))
            .mount(&mock_server)
            .await;

        let config = Config::default();
        let client = GogClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        let result = client.lookup("/en/game/some_title", "US").await.unwrap();
        assert_eq!(result, Some(PriceObservation { country: "US".to_string(), price: 59.99 }));
    }

    #[tokio::test]
    async fn test_lookup_absent_when_no_price_element() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en/game/some_title"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let config = Config::default();
        let client = GogClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        let result = client.lookup("/en/game/some_title", "DE").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_lookup_zero_sentinel_is_absent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en/game/some_title"))
            .respond_with(ResponseTemplate::new(200).set_body_string(priced_page("0.00")))
            .mount(&mock_server)
            .await;

        let config = Config::default();
        let client = GogClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        let result = client.lookup("/en/game/some_title", "PL").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_lookup_http_error_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en/game/some_title"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let config = Config::default();
        let client = GogClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        let result = client.lookup("/en/game/some_title", "US").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_lookup_sends_region_cookie() {
        let mock_server = MockServer::start().await;

        // Only the JP cookie is mocked; any other request would 404 and fail.
        Mock::given(method("GET"))
            .and(path("/en/game/foo"))
            .and(header("Cookie", "gog_lc=JP_USD_en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_string(priced_page("12.34")))
            .mount(&mock_server)
            .await;

        let config = Config::default();
        let client = GogClient::with_base_url(&config, Some(mock_server.uri())).unwrap();

        let result = client.lookup("/en/game/foo", "JP").await.unwrap();
        assert_eq!(result.unwrap().country, "JP");
    }

    #[tokio::test]
    async fn test_custom_extractor() {
        struct FixedExtractor;

        impl ExtractPrice for FixedExtractor {
            fn extract(&self, _html: &str) -> Option<f64> {
                Some(1.0)
            }
        }

        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en/game/foo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let config = Config::default();
        let client = GogClient::with_base_url(&config, Some(mock_server.uri()))
            .unwrap()
            .with_extractor(Box::new(FixedExtractor));

        let result = client.lookup("/en/game/foo", "US").await.unwrap();
        assert_eq!(result.unwrap().price, 1.0);
    }

    #[test]
    fn test_base_url_default() {
        let config = Config::default();
        let client = GogClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://www.gog.com");
    }
}
