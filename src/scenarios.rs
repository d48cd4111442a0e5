//! The two fixed runs the binary performs.
//!
//! Each scenario builds its own [`Shop`], drives it, and hands back the shop
//! together with the console lines it produced.

use rust_decimal_macros::dec;
use tracing::{info, instrument};

use crate::domain::{Client, Order, OrderId, OrderStatus, Product, ProductId};
use crate::shop::{Shop, ShopConfig, ShopError};

/// What a scenario printed, plus the shop it left behind.
#[derive(Debug)]
pub struct Report {
    pub title: &'static str,
    pub lines: Vec<String>,
    pub shop: Shop,
}

/// A client buys two physical products and an ebook, then the order is
/// processed.
#[instrument(skip(config))]
pub fn storefront(config: ShopConfig) -> Result<Report, ShopError> {
    let mut shop = Shop::new(config);

    let laptop = shop.add_product(Product::physical(101, "Laptop Lenovo", dec!(2500.0), 5))?;
    let mouse = shop.add_product(Product::physical(102, "Mouse Logitech", dec!(50.0), 20))?;
    let ebook = shop.add_product(Product::digital(103, "Ebook Python", dec!(15.0), "PDF"))?;

    let client = shop.add_client(Client::new(1, "Ana Torres", "ana@email.com"))?;
    let cart = shop.open_cart(501)?;

    shop.add_to_cart(cart, laptop, 1)?;
    shop.add_to_cart(cart, mouse, 2)?;
    shop.add_to_cart(cart, ebook, 1)?;

    let order = shop.place_order(client, cart)?;

    let mut lines = vec![shop.client(client)?.register()];
    lines.push(String::new());
    lines.push("Productos en el carrito:".to_string());
    lines.extend(shop.cart_view(cart)?.item_lines());
    lines.push(String::new());
    lines.push(format!("Total del carrito: {}", shop.cart_total(cart)?));
    lines.push(shop.process_order(order)?);
    lines.push(format!("Estado final del pedido: {}", shop.order(order)?.status()));

    info!(order_id = %order, "Storefront scenario finished");
    Ok(Report {
        title: "Tienda",
        lines,
        shop,
    })
}

/// An order is built by hand over a two-item cart and shown in full,
/// followed by the catalog after the stock moved.
#[instrument(skip(config))]
pub fn order_summary(config: ShopConfig) -> Result<Report, ShopError> {
    let mut shop = Shop::new(config);

    shop.add_product(Product::physical(1, "Laptop", dec!(2500.99), 10))?;
    shop.add_product(Product::physical(2, "Mouse", dec!(25.50), 50))?;

    let cart = shop.open_cart(101)?;
    shop.add_to_cart(cart, ProductId(1), 1)?;
    shop.add_to_cart(cart, ProductId(2), 1)?;

    let client = shop.add_client(Client::new(1, "Andrés", "andres@mail.com"))?;
    let order = shop.open_order(Order::new(OrderId(5001), client, cart, OrderStatus::Pending))?;

    let mut lines: Vec<String> = shop.order_view(order)?.to_string().lines().map(String::from).collect();
    lines.push(String::new());
    lines.push("Inventario:".to_string());
    lines.extend(shop.products().map(Product::listing));

    info!(order_id = %order, "Order summary scenario finished");
    Ok(Report {
        title: "Resumen de pedido",
        lines,
        shop,
    })
}
