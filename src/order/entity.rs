use crate::store::Entity;
use crate::domain::{Order, OrderId};
use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;

impl Entity for Order {
    type Id = OrderId;
    type Patch = (); // Status changes go through actions
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Error = OrderError;

    fn id(&self) -> OrderId { Order::id(self) }

    fn not_found(id: OrderId) -> OrderError { OrderError::NotFound(id) }

    fn already_exists(id: OrderId) -> OrderError { OrderError::AlreadyExists(id) }

    fn on_update(&mut self, _patch: ()) -> Result<(), OrderError> {
        Ok(())
    }

    /// Handles order-specific actions.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Process { client } => {
                Ok(OrderActionResult::Process(self.process(&client)))
            }
            OrderAction::ChangeStatus(status) => {
                Ok(OrderActionResult::ChangeStatus(self.change_status(status)))
            }
        }
    }
}
