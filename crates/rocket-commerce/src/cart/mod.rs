//! Shopping cart module.
//!
//! Contains the cart collection and the notices its operations emit.

mod cart;
mod notice;

pub use cart::Cart;
pub use notice::{CartOperation, Notice};
