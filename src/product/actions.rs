use crate::domain::StockPolicy;

/// Custom actions for Product entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond insert and patch.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Takes units out of stock.
    ///
    /// # Errors
    /// Under [`StockPolicy::Strict`], fails if the quantity exceeds the stock.
    /// Digital products accept any quantity and stay at 0.
    ReduceStock { quantity: u32, policy: StockPolicy },
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from CheckStock action - returns the current stock level
    CheckStock(i64),
    /// Result from ReduceStock action - returns the remaining stock
    ReduceStock(i64),
}
