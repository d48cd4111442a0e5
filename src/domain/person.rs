use std::fmt;

use crate::domain::{Cart, Order, OrderId, OrderStatus};

/// Identifier of a [`Client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(pub u32);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Someone known to the shop. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    id: u32,
    name: String,
    email: String,
}

impl Person {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} | Nombre: {} | Correo: {}", self.id, self.name, self.email)
    }
}

/// A [`Person`] who buys from the shop.
///
/// Shares the person's data; only the display line differs.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    person: Person,
}

impl Client {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            person: Person::new(id, name, email),
        }
    }

    pub fn id(&self) -> ClientId {
        ClientId(self.person.id)
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn email(&self) -> &str {
        self.person.email()
    }

    /// Confirmation line for a sign-up. Nothing is recorded anywhere.
    pub fn register(&self) -> String {
        format!("Cliente {} registrado con correo {}", self.person.name, self.person.email)
    }

    /// Builds a pending order for this client over `cart`.
    pub fn place_order(&self, cart: &Cart, id: OrderId) -> Order {
        Order::new(id, self.id(), cart.id(), OrderStatus::Pending)
    }
}

impl AsRef<Person> for Client {
    fn as_ref(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cliente: {} | Correo: {}", self.person.name, self.person.email)
    }
}
