//! Product catalog module.
//!
//! Contains the catalog entry, cart line item and stock types.

mod product;
mod stock;

pub use product::{CatalogEntry, Product};
pub use stock::Stock;
