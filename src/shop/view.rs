use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{Cart, Client, Order, Product};
use crate::store::Store;

/// A cart rendered against the catalog it points into.
#[derive(Debug, Clone, Copy)]
pub struct CartView<'a> {
    pub(super) cart: &'a Cart,
    pub(super) products: &'a Store<Product>,
}

impl<'a> CartView<'a> {
    /// One `- {product} x{quantity}` line per item, in insertion order.
    pub fn item_lines(&self) -> impl Iterator<Item = String> + 'a {
        let (cart, products) = (self.cart, self.products);
        cart.items().iter().map(move |item| match products.get(item.product()) {
            Ok(product) => format!("- {} x{}", product, item.quantity()),
            Err(err) => format!("- <{}> x{}", err, item.quantity()),
        })
    }
}

impl fmt::Display for CartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Carrito ID: {}", self.cart.id())?;
        for line in self.item_lines() {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// An order with its client, cart and total, shown together.
#[derive(Debug, Clone, Copy)]
pub struct OrderView<'a> {
    pub(super) order: &'a Order,
    pub(super) client: &'a Client,
    pub(super) cart: CartView<'a>,
    pub(super) total: Decimal,
}

impl OrderView<'_> {
    pub fn total(&self) -> Decimal {
        self.total
    }
}

impl fmt::Display for OrderView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Pedido ID: {} | Estado: {} | Total: ${}",
            self.order.id(),
            self.order.status(),
            self.total
        )?;
        writeln!(f, "{}", self.client)?;
        write!(f, "{}", self.cart)
    }
}
