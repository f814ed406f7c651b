//! Catalog and stock service port.

use std::sync::Arc;

use async_trait::async_trait;
use rocket_commerce::catalog::{CatalogEntry, Stock};
use rocket_commerce::ProductId;

use crate::{FetchClient, FetchError};

/// Read access to the remote catalog and stock service.
#[async_trait]
pub trait ShopApi: Send + Sync {
    /// Current stock for a product (`GET /stock/{id}`).
    async fn stock(&self, product_id: ProductId) -> Result<Stock, FetchError>;

    /// Catalog entry for a product (`GET /products/{id}`).
    async fn product(&self, product_id: ProductId) -> Result<CatalogEntry, FetchError>;
}

#[async_trait]
impl<T: ShopApi + ?Sized> ShopApi for Arc<T> {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, FetchError> {
        (**self).stock(product_id).await
    }

    async fn product(&self, product_id: ProductId) -> Result<CatalogEntry, FetchError> {
        (**self).product(product_id).await
    }
}

/// [`ShopApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpShopApi {
    client: FetchClient,
}

impl HttpShopApi {
    /// Create an adapter using the given client.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Path of the stock resource for a product.
    pub fn stock_path(product_id: ProductId) -> String {
        format!("/stock/{}", product_id)
    }

    /// Path of the catalog resource for a product.
    pub fn product_path(product_id: ProductId) -> String {
        format!("/products/{}", product_id)
    }

    /// The underlying client.
    pub fn client(&self) -> &FetchClient {
        &self.client
    }
}

#[async_trait]
impl ShopApi for HttpShopApi {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, FetchError> {
        self.client.get_json(&Self::stock_path(product_id)).await
    }

    async fn product(&self, product_id: ProductId) -> Result<CatalogEntry, FetchError> {
        self.client.get_json(&Self::product_path(product_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(HttpShopApi::stock_path(ProductId::new(4)), "/stock/4");
        assert_eq!(HttpShopApi::product_path(ProductId::new(4)), "/products/4");
    }

    #[test]
    fn test_resolved_urls() {
        let client = FetchClient::new("http://localhost:3333").unwrap();
        let api = HttpShopApi::new(client);
        assert_eq!(
            api.client().url(&HttpShopApi::stock_path(ProductId::new(1))),
            "http://localhost:3333/stock/1"
        );
    }
}
