use thiserror::Error;

use crate::domain::OrderId;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Order already exists: {0}")]
    AlreadyExists(OrderId),
}
