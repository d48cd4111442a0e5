use thiserror::Error;

use crate::domain::ProductId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Product already exists: {0}")]
    AlreadyExists(ProductId),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: i64 },
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: ProductId, price: String },
}
