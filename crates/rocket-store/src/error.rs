//! Operation error types.

use rocket_cache::CacheError;
use rocket_commerce::{CartError, ProductId};
use rocket_data::FetchError;
use thiserror::Error;

/// Why a cart operation was aborted.
///
/// These never reach callers; the store logs them and turns them into a
/// [`Notice`](rocket_commerce::cart::Notice).
#[derive(Error, Debug)]
pub enum OperationError {
    /// The cart rejected the transition.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The catalog or stock service could not be queried.
    #[error("shop service: {0}")]
    Fetch(#[from] FetchError),

    /// The snapshot could not be persisted.
    #[error("storage: {0}")]
    Storage(#[from] CacheError),

    /// The catalog answered with a different product than requested.
    #[error("catalog returned product {returned} for {requested}")]
    CatalogMismatch {
        requested: ProductId,
        returned: ProductId,
    },
}
