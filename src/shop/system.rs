use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument};

use crate::cart::{CartAction, CartActionResult};
use crate::domain::{
    Cart, CartId, CartItem, Client, ClientId, Order, OrderId, OrderStatus, Product, ProductId,
};
use crate::order::{OrderAction, OrderActionResult};
use crate::product::{ProductAction, ProductActionResult, ProductPatch};
use crate::store::Store;

use super::config::ShopConfig;
use super::error::ShopError;
use super::view::{CartView, OrderView};

/// The shop that owns every store and coordinates work across them.
///
/// Products live in one catalog and carts point into it by id, so a stock
/// change made through one cart is seen by every other cart.
#[derive(Debug)]
pub struct Shop {
    config: ShopConfig,
    products: Store<Product>,
    clients: Store<Client>,
    carts: Store<Cart>,
    orders: Store<Order>,
    /// `None` once the counter has handed out `u32::MAX`.
    next_order_id: Option<u32>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new(ShopConfig::default())
    }
}

impl Shop {
    pub fn new(config: ShopConfig) -> Self {
        info!(
            first_order_id = config.first_order_id,
            stock_policy = ?config.stock_policy,
            "Opening shop"
        );
        Self {
            config,
            products: Store::new(),
            clients: Store::new(),
            carts: Store::new(),
            orders: Store::new(),
            next_order_id: Some(config.first_order_id),
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    #[instrument(skip(self, product), fields(product_id = %product.id(), product_name = %product.name()))]
    pub fn add_product(&mut self, product: Product) -> Result<ProductId, ShopError> {
        let id = self.products.insert(product)?;
        info!("Product added to catalog");
        Ok(id)
    }

    pub fn product(&self, id: ProductId) -> Result<&Product, ShopError> {
        Ok(self.products.get(id)?)
    }

    /// Catalog in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }

    #[instrument(skip(self))]
    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> Result<&Product, ShopError> {
        debug!("Patching product");
        Ok(self.products.update(id, patch)?)
    }

    #[instrument(skip(self))]
    pub fn stock_of(&mut self, id: ProductId) -> Result<i64, ShopError> {
        match self.products.perform_action(id, ProductAction::CheckStock)? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(ShopError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    // -------------------------------------------------------------------------
    // Clients
    // -------------------------------------------------------------------------

    #[instrument(skip(self, client), fields(client_id = %client.id(), client_name = %client.name()))]
    pub fn add_client(&mut self, client: Client) -> Result<ClientId, ShopError> {
        let id = self.clients.insert(client)?;
        info!("Client added");
        Ok(id)
    }

    pub fn client(&self, id: ClientId) -> Result<&Client, ShopError> {
        Ok(self.clients.get(id)?)
    }

    // -------------------------------------------------------------------------
    // Carts
    // -------------------------------------------------------------------------

    #[instrument(skip(self))]
    pub fn open_cart(&mut self, id: u32) -> Result<CartId, ShopError> {
        let id = self.carts.insert(Cart::new(id))?;
        debug!(cart_id = %id, "Cart opened");
        Ok(id)
    }

    pub fn cart(&self, id: CartId) -> Result<&Cart, ShopError> {
        Ok(self.carts.get(id)?)
    }

    /// Puts `quantity` units of a product in a cart.
    ///
    /// Physical products lose that many units of stock. Digital products
    /// are left alone. Under the strict policy the stock check runs before
    /// the append, so a rejected add leaves both the cart and the stock
    /// unchanged.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, cart: CartId, product: ProductId, quantity: u32) -> Result<(), ShopError> {
        debug!(stock_policy = ?self.config.stock_policy, "Processing add_to_cart request");

        // Step 1: Validate cart and product
        self.carts.get(cart)?;
        let digital = self.products.get(product)?.is_digital();

        // Step 2: Reduce stock
        if digital {
            debug!("Digital product, stock untouched");
        } else {
            let action = ProductAction::ReduceStock {
                quantity,
                policy: self.config.stock_policy,
            };
            match self.products.perform_action(product, action) {
                Ok(ProductActionResult::ReduceStock(remaining)) => {
                    info!(remaining, "Stock reduced");
                }
                Ok(other) => return Err(ShopError::UnexpectedResult(format!("{other:?}"))),
                Err(e) => {
                    error!(error = %e, "Stock reduction failed");
                    return Err(e.into());
                }
            }
        }

        // Step 3: Append to cart
        match self.carts.perform_action(cart, CartAction::AddItem(CartItem::new(product, quantity)))? {
            CartActionResult::AddItem(items) => {
                info!(items, "Product added to cart");
                Ok(())
            }
        }
    }

    /// Sum of `price * quantity` over the cart, at current catalog prices.
    #[instrument(skip(self))]
    pub fn cart_total(&self, cart: CartId) -> Result<Decimal, ShopError> {
        let total = self
            .carts
            .get(cart)?
            .total(|id| Ok::<_, ShopError>(self.products.get(id)?.price()))?;
        debug!(%total, "Cart total computed");
        Ok(total)
    }

    pub fn cart_view(&self, cart: CartId) -> Result<CartView<'_>, ShopError> {
        Ok(CartView {
            cart: self.carts.get(cart)?,
            products: &self.products,
        })
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// The client places a pending order over the cart. The id comes from the
    /// shop's counter, skipping ids already taken through [`Shop::open_order`].
    #[instrument(skip(self))]
    pub fn place_order(&mut self, client: ClientId, cart: CartId) -> Result<OrderId, ShopError> {
        info!("Processing place_order request");

        let client = self.clients.get(client)?;
        let cart = self.carts.get(cart)?;

        let mut next = self.next_order_id.ok_or(ShopError::OrderIdsExhausted)?;
        while self.orders.contains(OrderId(next)) {
            next = next.checked_add(1).ok_or(ShopError::OrderIdsExhausted)?;
        }

        let order = client.place_order(cart, OrderId(next));
        let id = self.orders.insert(order)?;
        self.next_order_id = next.checked_add(1);

        info!(order_id = %id, "Order placed");
        Ok(id)
    }

    /// Registers an order built by the caller, with its own id and status.
    #[instrument(skip(self, order), fields(order_id = %order.id(), status = %order.status()))]
    pub fn open_order(&mut self, order: Order) -> Result<OrderId, ShopError> {
        self.clients.get(order.client())?;
        self.carts.get(order.cart())?;
        let id = self.orders.insert(order)?;
        info!("Order opened");
        Ok(id)
    }

    pub fn order(&self, id: OrderId) -> Result<&Order, ShopError> {
        Ok(self.orders.get(id)?)
    }

    /// Marks the order processed and returns the confirmation message.
    #[instrument(skip(self))]
    pub fn process_order(&mut self, id: OrderId) -> Result<String, ShopError> {
        let client_id = self.orders.get(id)?.client();
        let client = self.clients.get(client_id)?.clone();

        match self.orders.perform_action(id, OrderAction::Process { client })? {
            OrderActionResult::Process(message) => {
                info!("Order processed");
                Ok(message)
            }
            other => Err(ShopError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    /// Sets any status on the order and returns the previous one.
    #[instrument(skip(self, status))]
    pub fn change_order_status(
        &mut self,
        id: OrderId,
        status: impl Into<OrderStatus>,
    ) -> Result<OrderStatus, ShopError> {
        let status = status.into();
        debug!(%status, "Changing order status");
        match self.orders.perform_action(id, OrderAction::ChangeStatus(status))? {
            OrderActionResult::ChangeStatus(previous) => Ok(previous),
            other => Err(ShopError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    pub fn order_view(&self, id: OrderId) -> Result<OrderView<'_>, ShopError> {
        let order = self.orders.get(id)?;
        Ok(OrderView {
            order,
            client: self.clients.get(order.client())?,
            cart: self.cart_view(order.cart())?,
            total: self.cart_total(order.cart())?,
        })
    }
}
