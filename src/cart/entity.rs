use crate::store::Entity;
use crate::domain::{Cart, CartId};
use super::actions::{CartAction, CartActionResult};
use super::error::CartError;

impl Entity for Cart {
    type Id = CartId;
    type Patch = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Error = CartError;

    fn id(&self) -> CartId { Cart::id(self) }

    fn not_found(id: CartId) -> CartError { CartError::NotFound(id) }

    fn already_exists(id: CartId) -> CartError { CartError::AlreadyExists(id) }

    /// Carts change only through actions.
    fn on_update(&mut self, _patch: ()) -> Result<(), CartError> {
        Ok(())
    }

    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::AddItem(item) => {
                self.add_item(item);
                Ok(CartActionResult::AddItem(self.items().len()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartItem, ProductId};
    use crate::store::Store;

    #[test]
    fn test_add_item_action_appends() {
        let mut carts = Store::new();
        let id = carts.insert(Cart::new(501)).unwrap();

        let first = carts.perform_action(id, CartAction::AddItem(CartItem::new(ProductId(101), 1)));
        let second = carts.perform_action(id, CartAction::AddItem(CartItem::new(ProductId(102), 2)));
        assert_eq!(first, Ok(CartActionResult::AddItem(1)));
        assert_eq!(second, Ok(CartActionResult::AddItem(2)));

        let cart = carts.get(id).unwrap();
        assert_eq!(cart.items()[1], CartItem::new(ProductId(102), 2));
    }

    #[test]
    fn test_duplicate_cart_id_is_rejected() {
        let mut carts = Store::new();
        carts.insert(Cart::new(501)).unwrap();
        assert_eq!(carts.insert(Cart::new(501)), Err(CartError::AlreadyExists(CartId(501))));
    }
}
