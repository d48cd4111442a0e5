use crate::domain::CartItem;

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Appends an item at the end of the cart.
    AddItem(CartItem),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// Number of items in the cart after the append.
    AddItem(usize),
}
