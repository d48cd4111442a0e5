use crate::store::Entity;
use crate::domain::{Client, ClientId};
use super::error::ClientError;

impl Entity for Client {
    type Id = ClientId;
    type Patch = ();
    type Action = ();
    type ActionResult = ();
    type Error = ClientError;

    fn id(&self) -> ClientId { Client::id(self) }

    fn not_found(id: ClientId) -> ClientError { ClientError::NotFound(id) }

    fn already_exists(id: ClientId) -> ClientError { ClientError::AlreadyExists(id) }

    /// Clients are immutable once registered.
    fn on_update(&mut self, _patch: ()) -> Result<(), ClientError> {
        Ok(())
    }

    /// Handles client-specific actions.
    ///
    /// Currently, no custom actions are defined for clients.
    fn handle_action(&mut self, _action: ()) -> Result<(), ClientError> {
        Ok(())
    }
}
