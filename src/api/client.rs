// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the image search API.
//!
//! `Client::search` is a single best-effort call: no retry, no caching and no
//! rate limiting. URL construction and response parsing are plain functions
//! so they can be tested without a network.

use super::record::{ImageRecord, SearchResponse};
use crate::config::{self, Config, ImageType, Orientation};
use crate::error::{Error, Result};
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;

/// Resolved request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub endpoint: String,
    pub key: String,
    pub per_page: u32,
    pub image_type: ImageType,
    pub orientation: Orientation,
    pub timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::from_config(&Config::default(), None)
    }
}

impl ApiSettings {
    /// Builds settings from the config file.
    ///
    /// The API key is taken from `cli_key`, then the `PIXABAY_API_KEY`
    /// environment variable, then `[api].key`.
    #[must_use]
    pub fn from_config(config: &Config, cli_key: Option<String>) -> Self {
        let key = cli_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(config::ENV_API_KEY)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
            .or_else(|| config.api.key.clone())
            .unwrap_or_default();

        Self {
            endpoint: config
                .api
                .endpoint
                .clone()
                .unwrap_or_else(|| config::DEFAULT_API_ENDPOINT.to_string()),
            key,
            per_page: config.per_page(),
            image_type: config.api.image_type.unwrap_or_default(),
            orientation: config.api.orientation.unwrap_or_default(),
            timeout: Duration::from_secs(config.timeout_secs()),
        }
    }

    #[must_use]
    pub fn has_key(&self) -> bool {
        !self.key.trim().is_empty()
    }
}

/// Builds the search URL for `query` and the 1-based `page`.
pub fn request_url(settings: &ApiSettings, query: &str, page: u32) -> Result<Url> {
    let page = page.max(1).to_string();
    let per_page = settings.per_page.to_string();
    Url::parse_with_params(
        &settings.endpoint,
        &[
            ("q", query),
            ("page", page.as_str()),
            ("key", settings.key.as_str()),
            ("image_type", settings.image_type.as_query_value()),
            ("orientation", settings.orientation.as_query_value()),
            ("per_page", per_page.as_str()),
        ],
    )
    .map_err(|e| Error::Config(format!("invalid API endpoint {:?}: {e}", settings.endpoint)))
}

/// Parses a search response body into the list of hits.
pub fn parse_response(body: &[u8]) -> Result<Vec<ImageRecord>> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    tracing::debug!(
        total = response.total,
        total_hits = response.total_hits,
        hits = response.hits.len(),
        "search response parsed"
    );
    Ok(response.hits)
}

/// Shared handle to the HTTP client. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    settings: Arc<ApiSettings>,
}

impl Client {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        Self::with_builder(settings, reqwest::Client::builder())
    }

    fn with_builder(settings: ApiSettings, builder: reqwest::ClientBuilder) -> Result<Self> {
        let http = builder
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http,
            settings: Arc::new(settings),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Fetches one page of results.
    pub async fn search(&self, query: &str, page: u32) -> Result<Vec<ImageRecord>> {
        let url = request_url(&self.settings, query, page)?;
        tracing::info!(query, page, "searching images");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(query, page, status = status.as_u16(), "search request rejected");
            return Err(Error::Http(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_response(&body)
    }

    /// Downloads raw image bytes (thumbnail or full-size).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ApiSettings {
        ApiSettings {
            endpoint: "https://pixabay.com/api/".to_string(),
            key: "test-key".to_string(),
            per_page: 12,
            image_type: ImageType::Photo,
            orientation: Orientation::Horizontal,
            timeout: Duration::from_secs(5),
        }
    }

    fn param(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn request_url_carries_all_parameters() {
        let url = request_url(&settings(), "cats", 2).expect("valid url");

        assert_eq!(url.host_str(), Some("pixabay.com"));
        assert_eq!(url.path(), "/api/");
        assert_eq!(param(&url, "q").as_deref(), Some("cats"));
        assert_eq!(param(&url, "page").as_deref(), Some("2"));
        assert_eq!(param(&url, "key").as_deref(), Some("test-key"));
        assert_eq!(param(&url, "image_type").as_deref(), Some("photo"));
        assert_eq!(param(&url, "orientation").as_deref(), Some("horizontal"));
        assert_eq!(param(&url, "per_page").as_deref(), Some("12"));
    }

    #[test]
    fn request_url_encodes_query_text() {
        let url = request_url(&settings(), "red fox & owl", 1).expect("valid url");
        assert_eq!(param(&url, "q").as_deref(), Some("red fox & owl"));
        assert!(!url.as_str().contains("red fox"));
    }

    #[test]
    fn request_url_never_asks_for_page_zero() {
        let url = request_url(&settings(), "cats", 0).expect("valid url");
        assert_eq!(param(&url, "page").as_deref(), Some("1"));
    }

    #[test]
    fn invalid_endpoint_is_a_config_error() {
        let bad = ApiSettings {
            endpoint: "not a url".to_string(),
            ..settings()
        };
        assert!(matches!(request_url(&bad, "cats", 1), Err(Error::Config(_))));
    }

    #[test]
    fn parse_response_extracts_hits() {
        let body = br#"{
            "total": 4692,
            "totalHits": 500,
            "hits": [
                {
                    "id": 195893,
                    "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                    "tags": "blossom, bloom, flower",
                    "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                    "webformatWidth": 640,
                    "webformatHeight": 360,
                    "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                    "user": "Josch13"
                }
            ]
        }"#;

        let hits = parse_response(body).expect("valid body");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 195893);
        assert_eq!(hits[0].tags, "blossom, bloom, flower");
        assert!(hits[0].preview_url.ends_with("_640.jpg"));
        assert!(hits[0].large_image_url.ends_with("_1280.jpg"));
        assert_eq!(hits[0].preview_height, 360);
    }

    #[test]
    fn parse_response_accepts_empty_hits() {
        let hits = parse_response(br#"{"total":0,"totalHits":0,"hits":[]}"#).expect("valid body");
        assert!(hits.is_empty());
    }

    #[test]
    fn parse_response_rejects_garbage() {
        assert!(matches!(
            parse_response(b"[ERROR 400] Invalid API key"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn settings_prefer_cli_key_over_config() {
        let mut config = Config::default();
        config.api.key = Some("from-config".to_string());

        let resolved = ApiSettings::from_config(&config, Some("from-cli".to_string()));
        assert_eq!(resolved.key, "from-cli");
        assert!(resolved.has_key());
    }

    #[test]
    fn settings_apply_config_parameters() {
        let mut config = Config::default();
        config.api.per_page = Some(30);
        config.api.orientation = Some(Orientation::Vertical);

        let resolved = ApiSettings::from_config(&config, Some("k".to_string()));
        assert_eq!(resolved.per_page, 30);
        assert_eq!(resolved.orientation, Orientation::Vertical);
        assert_eq!(resolved.endpoint, config::DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn client_builds_without_network() {
        let client = Client::new(settings()).expect("client should build");
        assert_eq!(client.settings().per_page, 12);
    }

    /// Serves a single canned HTTP response on a loopback port and returns
    /// the endpoint URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = vec![0_u8; 8192];
            let mut read = 0;
            while read < buf.len() {
                let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/api/")
    }

    fn loopback_client(endpoint: String) -> Client {
        Client::with_builder(
            ApiSettings {
                endpoint,
                ..settings()
            },
            reqwest::Client::builder().no_proxy(),
        )
        .expect("client should build")
    }

    #[tokio::test]
    async fn search_returns_parsed_hits() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"total":1,"totalHits":1,"hits":[{"id":7,"webformatURL":"http://x/w.jpg","largeImageURL":"http://x/l.jpg","tags":"owl"}]}"#,
        )
        .await;

        let hits = loopback_client(endpoint)
            .search("owl", 1)
            .await
            .expect("search should succeed");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 7);
        assert_eq!(hits[0].tags, "owl");
    }

    #[tokio::test]
    async fn search_maps_error_status() {
        let endpoint = serve_once("500 Internal Server Error", "{}").await;

        let result = loopback_client(endpoint).search("owl", 1).await;
        assert_eq!(result, Err(Error::Http(500)));
    }

    #[tokio::test]
    async fn fetch_bytes_returns_body() {
        let endpoint = serve_once("200 OK", "imagedata").await;

        let bytes = loopback_client(endpoint.clone())
            .fetch_bytes(&endpoint)
            .await
            .expect("download should succeed");
        assert_eq!(bytes, b"imagedata");
    }
}
