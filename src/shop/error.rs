use thiserror::Error;

use crate::cart::CartError;
use crate::client::ClientError;
use crate::order::OrderError;
use crate::product::ProductError;

/// Any failure surfaced by a [`Shop`](super::Shop) operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("No order ids left to allocate")]
    OrderIdsExhausted,
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),
}
