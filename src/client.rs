//! Core HTTP client for the DhanHQ REST API v2.
//!
//! The [`DhanClient`] struct wraps [`reqwest::Client`] with the
//! `access-token` header and JSON content negotiation, and provides a typed
//! `post` method.
//!
//! Endpoint methods are added to `DhanClient` via `impl` blocks in the
//! [`crate::api`] module.

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::constants::{ACCESS_TOKEN_HEADER, API_BASE_URL};
use crate::error::{ApiErrorBody, ProxyError, Result};

/// Core HTTP client for the DhanHQ REST API v2.
///
/// Wraps [`reqwest::Client`] and injects the access token header into every
/// request. The header value is validated and cached at construction time.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use dhan_kline_proxy::client::DhanClient;
///
/// # fn main() -> dhan_kline_proxy::Result<()> {
/// let client = DhanClient::new("your-access-token")?;
/// assert_eq!(client.base_url(), "https://api.dhan.co");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DhanClient {
    http: reqwest::Client,
    /// Base URL for REST API requests (defaults to [`API_BASE_URL`]).
    base_url: String,
    /// Pre-built auth header value.
    auth_header_token: HeaderValue,
}

impl DhanClient {
    /// Create a new `DhanClient` with the given access token.
    ///
    /// Uses the default API base URL (`https://api.dhan.co`).
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(access_token, API_BASE_URL)
    }

    /// Create a new `DhanClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a sandbox or mock server.
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;

        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()?;

        let access_token: String = access_token.into();
        let mut auth_header_token = HeaderValue::from_str(&access_token).map_err(|_| {
            ProxyError::Config("access token contains invalid header characters".into())
        })?;
        auth_header_token.set_sensitive(true);

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_header_token,
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a POST request with a JSON body and deserialize the response.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let resp = self
            .http
            .post(&url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Per-request auth header, cloned from the cached [`HeaderValue`].
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(ACCESS_TOKEN_HEADER, self.auth_header_token.clone());
        headers
    }

    /// Read a response, returning either the deserialized body or a `ProxyError`.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|e| {
                tracing::debug!(body = %String::from_utf8_lossy(&bytes), "undecodable DhanHQ body");
                ProxyError::UpstreamMalformed(e)
            })
        } else {
            let body = String::from_utf8_lossy(&bytes);
            Err(self.parse_error_body(status, &body))
        }
    }

    /// Try to parse the API's JSON error structure; fall back to a raw HTTP
    /// status error.
    fn parse_error_body(&self, status: reqwest::StatusCode, body: &str) -> ProxyError {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
            if api_err.error_code.is_some() || api_err.error_message.is_some() {
                return ProxyError::Api(api_err);
            }
        }
        ProxyError::HttpStatus {
            status,
            body: body.to_owned(),
        }
    }
}
