use thiserror::Error;

use crate::domain::ClientId;

/// Errors that can occur during client operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Client not found: {0}")]
    NotFound(ClientId),
    #[error("Client already exists: {0}")]
    AlreadyExists(ClientId),
}
