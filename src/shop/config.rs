use crate::domain::StockPolicy;

/// Knobs for a [`Shop`](super::Shop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopConfig {
    /// Id handed to the first order placed through the shop. Later orders
    /// count up from here.
    pub first_order_id: u32,
    pub stock_policy: StockPolicy,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            first_order_id: 9001,
            stock_policy: StockPolicy::Strict,
        }
    }
}

impl ShopConfig {
    pub fn with_stock_policy(mut self, stock_policy: StockPolicy) -> Self {
        self.stock_policy = stock_policy;
        self
    }

    pub fn with_first_order_id(mut self, first_order_id: u32) -> Self {
        self.first_order_id = first_order_id;
        self
    }
}
