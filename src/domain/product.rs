use std::fmt;

use rust_decimal::Decimal;

use crate::product::ProductError;

/// Identifier of a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// What kind of product this is. Only physical products carry stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    Physical { stock: i64 },
    Digital { format: String },
}

/// How a stock reduction treats requests larger than what is on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockPolicy {
    /// Reject the reduction and leave stock untouched.
    #[default]
    Strict,
    /// Subtract anyway; stock may go negative.
    AllowNegative,
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    kind: ProductKind,
}

impl Product {
    pub fn physical(id: u32, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            kind: ProductKind::Physical { stock: i64::from(stock) },
        }
    }

    pub fn digital(id: u32, name: impl Into<String>, price: Decimal, format: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            kind: ProductKind::Digital { format: format.into() },
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn is_digital(&self) -> bool {
        matches!(self.kind, ProductKind::Digital { .. })
    }

    /// Units on hand. Always 0 for digital products.
    pub fn stock(&self) -> i64 {
        match self.kind {
            ProductKind::Physical { stock } => stock,
            ProductKind::Digital { .. } => 0,
        }
    }

    pub fn format(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Physical { .. } => None,
            ProductKind::Digital { format } => Some(format),
        }
    }

    pub(crate) fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    /// Overwrites the stock of a physical product. No-op for digital ones.
    pub(crate) fn set_stock(&mut self, units: u32) {
        if let ProductKind::Physical { stock } = &mut self.kind {
            *stock = i64::from(units);
        }
    }

    /// Takes `amount` units out of stock and returns what is left.
    ///
    /// Digital products are never touched.
    ///
    /// # Errors
    /// Under [`StockPolicy::Strict`], fails with
    /// [`ProductError::InsufficientStock`] when `amount` exceeds the stock.
    pub fn reduce_stock(&mut self, amount: u32, policy: StockPolicy) -> Result<i64, ProductError> {
        let ProductKind::Physical { stock } = &mut self.kind else {
            return Ok(0);
        };
        let requested = i64::from(amount);
        if policy == StockPolicy::Strict && requested > *stock {
            return Err(ProductError::InsufficientStock {
                requested: amount,
                available: *stock,
            });
        }
        *stock -= requested;
        Ok(*stock)
    }

    /// Catalog line with the product id.
    pub fn listing(&self) -> String {
        match &self.kind {
            ProductKind::Physical { stock } => format!(
                "ID: {} | Nombre: {} | Precio: ${} | Stock: {}",
                self.id, self.name, self.price, stock
            ),
            ProductKind::Digital { format } => format!(
                "ID: {} | Nombre: {} | Precio: ${} | Formato: {}",
                self.id, self.name, self.price, format
            ),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ProductKind::Physical { stock } => {
                write!(f, "{} - Precio: ${}, Stock: {}", self.name, self.price, stock)
            }
            ProductKind::Digital { format } => {
                write!(f, "{} (Digital - {}) - Precio: ${}", self.name, format, self.price)
            }
        }
    }
}
