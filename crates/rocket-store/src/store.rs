//! The cart store.
//!
//! [`CartStore`] owns the in-memory cart, validates every mutation against
//! the stock service, persists the result and publishes it to subscribers.
//!
//! # Write discipline
//!
//! A store has a single writer at a time. Every mutating operation holds the
//! writer lock from the moment it reads the current cart until the new
//! snapshot is both persisted and published, so overlapping calls are
//! serialized and none of them can overwrite another's result. The snapshot
//! is written to storage before it is published: a subscriber that observes
//! a new cart can rely on it being persisted already.

use std::sync::Arc;

use rocket_cache::{cache_key, Cache};
use rocket_commerce::cart::{Cart, CartOperation, Notice};
use rocket_commerce::catalog::Product;
use rocket_commerce::{CartError, ProductId};
use rocket_data::ShopApi;
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};

use crate::error::OperationError;
use crate::notifier::{Notifier, TracingNotifier};

/// Namespace the cart slot lives under unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "@RocketShoes";

/// Slot name of the cart inside its namespace.
pub const CART_SLOT: &str = "cart";

/// Arguments of [`CartStore::update_product_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    /// Line to change.
    pub product_id: ProductId,
    /// Requested amount; validated by the store.
    pub amount: i64,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

/// Builder for [`CartStore`].
pub struct CartStoreBuilder<A> {
    api: A,
    cache: Cache,
    namespace: String,
    notifier: Arc<dyn Notifier>,
}

impl<A: ShopApi> CartStoreBuilder<A> {
    /// Use a different key namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Deliver notices through `notifier` instead of the log.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Restore the persisted cart and open the store.
    pub fn open(self) -> CartStore<A> {
        let key = cache_key!(self.namespace, CART_SLOT);
        let cart = restore(&self.cache, &key);
        let (snapshot, _) = watch::channel(cart);

        CartStore {
            api: self.api,
            cache: self.cache,
            key,
            notifier: self.notifier,
            writer: Mutex::new(()),
            snapshot,
        }
    }
}

/// Shared cart state with stock-checked, persisted mutations.
///
/// Operations never return errors: a rejected operation leaves the cart as it
/// was and emits a [`Notice`] through the configured notifier.
pub struct CartStore<A> {
    api: A,
    cache: Cache,
    key: String,
    notifier: Arc<dyn Notifier>,
    writer: Mutex<()>,
    snapshot: watch::Sender<Cart>,
}

impl<A: ShopApi> CartStore<A> {
    /// Start building a store over a shop service and a cache.
    pub fn builder(api: A, cache: Cache) -> CartStoreBuilder<A> {
        CartStoreBuilder {
            api,
            cache,
            namespace: DEFAULT_NAMESPACE.to_string(),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Open a store with the default namespace and log-only notices.
    pub fn open(api: A, cache: Cache) -> Self {
        Self::builder(api, cache).open()
    }

    /// Storage key of the cart snapshot.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> Cart {
        self.snapshot.borrow().clone()
    }

    /// Receive every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.snapshot.subscribe()
    }

    /// Add one unit of a product, fetching its catalog entry if it is new.
    pub async fn add_product(&self, product_id: ProductId) {
        let _writer = self.writer.lock().await;
        let result = self.try_add(product_id).await;
        self.finish(CartOperation::Add, product_id, result);
    }

    /// Drop a product's line from the cart.
    pub async fn remove_product(&self, product_id: ProductId) {
        let _writer = self.writer.lock().await;
        let result = self.try_remove(product_id);
        self.finish(CartOperation::Remove, product_id, result);
    }

    /// Set a product's amount, within the available stock.
    pub async fn update_product_amount(&self, request: UpdateProductAmount) {
        let _writer = self.writer.lock().await;
        let result = self.try_update(request).await;
        self.finish(CartOperation::UpdateAmount, request.product_id, result);
    }

    async fn try_add(&self, product_id: ProductId) -> Result<Cart, OperationError> {
        let current = self.cart();

        let stock = self.api.stock(product_id).await?;
        if !stock.is_available() {
            return Err(CartError::InsufficientStock {
                product_id,
                requested: 1,
                available: stock.amount,
            }
            .into());
        }

        let next = if current.contains(product_id) {
            current.incremented(product_id, &stock)?
        } else {
            let entry = self.api.product(product_id).await?;
            if entry.id != product_id {
                return Err(OperationError::CatalogMismatch {
                    requested: product_id,
                    returned: entry.id,
                });
            }
            current.with_new_line(entry)?
        };

        self.commit(next)
    }

    fn try_remove(&self, product_id: ProductId) -> Result<Cart, OperationError> {
        let next = self.cart().without(product_id)?;
        self.commit(next)
    }

    async fn try_update(&self, request: UpdateProductAmount) -> Result<Cart, OperationError> {
        let UpdateProductAmount { product_id, amount } = request;
        let current = self.cart();

        current.validate_amount(product_id, amount)?;
        let stock = self.api.stock(product_id).await?;
        let next = current.with_amount(product_id, amount, &stock)?;

        self.commit(next)
    }

    /// Persist, then publish. Caller holds the writer lock.
    fn commit(&self, next: Cart) -> Result<Cart, OperationError> {
        self.cache.set(&self.key, &next)?;
        self.snapshot.send_replace(next.clone());
        Ok(next)
    }

    fn finish(
        &self,
        operation: CartOperation,
        product_id: ProductId,
        result: Result<Cart, OperationError>,
    ) {
        match result {
            Ok(cart) => {
                tracing::debug!(
                    %operation,
                    %product_id,
                    lines = cart.len(),
                    "cart updated"
                );
            }
            Err(error) => {
                let notice = match &error {
                    OperationError::Cart(e) => Notice::for_error(operation, e),
                    _ => Notice::failure(operation),
                };
                tracing::warn!(
                    %operation,
                    %product_id,
                    %error,
                    %notice,
                    "cart operation rejected"
                );
                self.notifier.notify(notice);
            }
        }
    }
}

/// Load the persisted cart, falling back to an empty one.
fn restore(cache: &Cache, key: &str) -> Cart {
    match cache.get::<Vec<Product>>(key) {
        Ok(Some(items)) => {
            let stored = items.len();
            let cart = Cart::restore(items);
            if cart.len() < stored {
                tracing::warn!(
                    key,
                    dropped = stored - cart.len(),
                    "dropped invalid lines from cart snapshot"
                );
            }
            tracing::info!(key, lines = cart.len(), "restored cart");
            cart
        }
        Ok(None) => Cart::new(),
        Err(error) => {
            tracing::warn!(key, %error, "unreadable cart snapshot, starting empty");
            Cart::new()
        }
    }
}
