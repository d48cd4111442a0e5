use crate::store::Entity;
use crate::domain::{Product, ProductId};
use super::dtos::ProductPatch;
use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;

impl Entity for Product {
    type Id = ProductId;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    fn id(&self) -> ProductId { Product::id(self) }

    fn not_found(id: ProductId) -> ProductError { ProductError::NotFound(id) }

    fn already_exists(id: ProductId) -> ProductError { ProductError::AlreadyExists(id) }

    /// Rejects negative prices before the product enters the catalog.
    fn on_create(&mut self) -> Result<(), ProductError> {
        if self.price().is_sign_negative() {
            return Err(ProductError::InvalidPrice {
                id: Product::id(self),
                price: self.price().to_string(),
            });
        }
        Ok(())
    }

    /// Updates the product's price and/or stock.
    ///
    /// # Fields Updated
    /// - `price`: Unit price, must not be negative
    /// - `stock`: Units on hand (ignored for digital products)
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), ProductError> {
        if let Some(price) = patch.price {
            if price.is_sign_negative() {
                return Err(ProductError::InvalidPrice {
                    id: Product::id(self),
                    price: price.to_string(),
                });
            }
            self.set_price(price);
        }
        if let Some(stock) = patch.stock {
            self.set_stock(stock);
        }
        Ok(())
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `ReduceStock { quantity, policy }`: Decrements stock by `quantity`
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => {
                Ok(ProductActionResult::CheckStock(self.stock()))
            }
            ProductAction::ReduceStock { quantity, policy } => {
                self.reduce_stock(quantity, policy).map(ProductActionResult::ReduceStock)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StockPolicy;
    use crate::store::Store;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reduce_stock_action_is_shared_through_the_store() {
        let mut catalog = Store::new();
        let id = catalog.insert(Product::physical(101, "Laptop Lenovo", dec!(2500.0), 5)).unwrap();

        let result = catalog
            .perform_action(id, ProductAction::ReduceStock { quantity: 1, policy: StockPolicy::Strict })
            .unwrap();
        assert_eq!(result, ProductActionResult::ReduceStock(4));
        assert_eq!(
            catalog.perform_action(id, ProductAction::CheckStock).unwrap(),
            ProductActionResult::CheckStock(4)
        );
        assert_eq!(catalog.get(id).unwrap().stock(), 4);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut catalog = Store::new();
        let err = catalog.insert(Product::physical(1, "Cable", dec!(-1.00), 5)).unwrap_err();
        assert!(matches!(err, ProductError::InvalidPrice { .. }));

        let id = catalog.insert(Product::physical(1, "Cable", dec!(1.00), 5)).unwrap();
        let err = catalog
            .update(id, ProductPatch { price: Some(dec!(-3)), stock: None })
            .unwrap_err();
        assert!(matches!(err, ProductError::InvalidPrice { .. }));
        assert_eq!(catalog.get(id).unwrap().price(), dec!(1.00));
    }

    #[test]
    fn test_patch_price_and_stock() {
        let mut catalog = Store::new();
        let id = catalog.insert(Product::physical(2, "Mouse", dec!(25.50), 50)).unwrap();
        let product = catalog
            .update(id, ProductPatch { price: Some(dec!(19.99)), stock: Some(70) })
            .unwrap();
        assert_eq!(product.price(), dec!(19.99));
        assert_eq!(product.stock(), 70);
    }
}
