//! Cart store logic: the cart-local half of adding a product.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
