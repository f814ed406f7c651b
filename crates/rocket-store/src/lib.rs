//! Shopping cart store for RocketShoes.
//!
//! Ties the cart model to the shop service and to persistent storage:
//! every mutation is checked against live stock, written under
//! `@RocketShoes:cart` and then published to subscribers. Failures never
//! surface as errors; they are reported as notices.
//!
//! # Example
//!
//! ```rust,no_run
//! use rocket_cache::{Cache, FileStore};
//! use rocket_commerce::ProductId;
//! use rocket_data::{FetchClient, HttpShopApi};
//! use rocket_store::CartStore;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpShopApi::new(FetchClient::new("http://localhost:3333")?);
//! let cache = Cache::new(FileStore::open(".rocket")?);
//! let store = CartStore::open(api, cache);
//!
//! store.add_product(ProductId::new(1)).await;
//! println!("{} line(s), total {}", store.cart().len(), store.cart().total());
//! # Ok(())
//! # }
//! ```

mod error;
mod notifier;
mod store;

pub use error::OperationError;
pub use notifier::{ChannelNotifier, Notifier, TracingNotifier};
pub use store::{CartStore, CartStoreBuilder, UpdateProductAmount, CART_SLOT, DEFAULT_NAMESPACE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartStore, ChannelNotifier, Notifier, OperationError, TracingNotifier,
        UpdateProductAmount,
    };
}
