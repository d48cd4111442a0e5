use rust_decimal::Decimal;

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
}
