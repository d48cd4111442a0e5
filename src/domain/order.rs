use std::fmt;

use crate::domain::{CartId, Client, ClientId};

/// Identifier of an [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Order status.
///
/// The field is open: any label is accepted. Known labels map to their
/// variant, everything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processed,
    Paid,
    Shipped,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Processed => "Procesado",
            OrderStatus::Paid => "Pagado",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Cancelled => "Cancelado",
            OrderStatus::Other(label) => label,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(label: &str) -> Self {
        match label {
            "Pendiente" => OrderStatus::Pending,
            "Procesado" => OrderStatus::Processed,
            "Pagado" => OrderStatus::Paid,
            "Enviado" => OrderStatus::Shipped,
            "Cancelado" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        OrderStatus::from(label.as_str())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents a customer order: one client, one cart, and a status.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    client: ClientId,
    cart: CartId,
    status: OrderStatus,
}

impl Order {
    pub fn new(id: OrderId, client: ClientId, cart: CartId, status: impl Into<OrderStatus>) -> Self {
        Self {
            id,
            client,
            cart,
            status: status.into(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn client(&self) -> ClientId {
        self.client
    }

    pub fn cart(&self) -> CartId {
        self.cart
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// Marks the order processed, whatever its current status.
    pub fn process(&mut self, client: &Client) -> String {
        self.status = OrderStatus::Processed;
        format!("Pedido {} procesado para cliente {}.", self.id, client.name())
    }

    /// Sets any status and returns the previous one.
    pub fn change_status(&mut self, status: impl Into<OrderStatus>) -> OrderStatus {
        std::mem::replace(&mut self.status, status.into())
    }
}
