use std::fmt;

use rust_decimal::Decimal;

use crate::cart::CartError;
use crate::domain::ProductId;

/// Identifier of a [`Cart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartId(pub u32);

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A product reference plus how many units of it are in the cart.
/// The product itself lives in the catalog, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    product: ProductId,
    quantity: u32,
}

impl CartItem {
    pub fn new(product: ProductId, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> ProductId {
        self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Ordered list of cart items.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    id: CartId,
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: u32) -> Self {
        Self {
            id: CartId(id),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> CartId {
        self.id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item`. Stock is the caller's concern.
    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Sum of `price * quantity` over every item, `0` when empty.
    ///
    /// `price_of` resolves the unit price of each product id. A sum that
    /// leaves the `Decimal` range fails with [`CartError::TotalOverflow`].
    pub fn total<F, E>(&self, mut price_of: F) -> Result<Decimal, E>
    where
        F: FnMut(ProductId) -> Result<Decimal, E>,
        E: From<CartError>,
    {
        self.items.iter().try_fold(Decimal::ZERO, |acc, item| {
            let line = price_of(item.product)?
                .checked_mul(Decimal::from(item.quantity))
                .ok_or(CartError::TotalOverflow(self.id))?;
            Ok(acc.checked_add(line).ok_or(CartError::TotalOverflow(self.id))?)
        })
    }
}
