use thiserror::Error;

use crate::domain::CartId;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    NotFound(CartId),
    #[error("Cart already exists: {0}")]
    AlreadyExists(CartId),
    #[error("Cart total out of range: {0}")]
    TotalOverflow(CartId),
}
