//! HTTP client for the RocketShoes catalog and stock service.
//!
//! Provides a small client with base-URL handling and JSON decoding, and the
//! [`ShopApi`] port the cart store queries.
//!
//! # Example
//!
//! ```rust,ignore
//! use rocket_data::{FetchClient, HttpShopApi, ShopApi};
//! use rocket_commerce::ProductId;
//!
//! let client = FetchClient::new("http://localhost:3333")?
//!     .with_timeout(std::time::Duration::from_secs(10));
//! let api = HttpShopApi::new(client);
//!
//! let stock = api.stock(ProductId::new(1)).await?;
//! let entry = api.product(ProductId::new(1)).await?;
//! ```

mod error;
mod response;
mod shop;

pub use error::FetchError;
pub use response::Response;
pub use shop::{HttpShopApi, ShopApi};

use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for making outbound requests.
///
/// A thin wrapper around `reqwest::Client` that resolves relative paths
/// against a base URL and applies an optional timeout.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl FetchClient {
    /// Create a new HTTP client for a base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        reqwest::Url::parse(&base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url,
            timeout: None,
        })
    }

    /// Abort requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL.
    ///
    /// Absolute URLs are returned unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Send a GET request and read the whole response.
    pub async fn get(&self, path: &str) -> Result<Response, FetchError> {
        let url = self.url(path);

        let mut request = self.http.get(&url).header("Accept", "application/json");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = Response::read(request.send().await?).await?;
        tracing::debug!(%url, status = response.status, "fetched");
        Ok(response)
    }

    /// Send a GET request and decode a successful JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.get(path).await?.error_for_status()?.json()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpShopApi, Response, ShopApi};
}
