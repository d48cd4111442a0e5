use crate::domain::{Client, OrderStatus};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Marks the order processed on behalf of `client`.
    Process { client: Client },
    /// Sets any status, without checking the transition.
    ChangeStatus(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Confirmation message
    Process(String),
    /// Status the order had before the change
    ChangeStatus(OrderStatus),
}
