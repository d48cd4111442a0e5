#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::domain::{CartId, ClientId, OrderId, OrderStatus, Product, ProductId, StockPolicy};
    use crate::scenarios;
    use crate::shop::{Shop, ShopConfig};

    #[test]
    fn test_storefront_scenario() {
        let report = scenarios::storefront(ShopConfig::default()).unwrap();

        assert_eq!(
            report.lines,
            vec![
                "Cliente Ana Torres registrado con correo ana@email.com",
                "",
                "Productos en el carrito:",
                "- Laptop Lenovo - Precio: $2500.0, Stock: 4 x1",
                "- Mouse Logitech - Precio: $50.0, Stock: 18 x2",
                "- Ebook Python (Digital - PDF) - Precio: $15.0 x1",
                "",
                "Total del carrito: 2615.0",
                "Pedido 9001 procesado para cliente Ana Torres.",
                "Estado final del pedido: Procesado",
            ]
        );

        let shop = &report.shop;
        assert_eq!(shop.product(ProductId(101)).unwrap().stock(), 4);
        assert_eq!(shop.product(ProductId(102)).unwrap().stock(), 18);
        assert_eq!(shop.product(ProductId(103)).unwrap().stock(), 0);
        assert_eq!(shop.cart_total(CartId(501)).unwrap(), dec!(2615.0));

        let order = shop.order(OrderId(9001)).unwrap();
        assert_eq!(order.client(), ClientId(1));
        assert_eq!(*order.status(), OrderStatus::Processed);
    }

    #[test]
    fn test_order_summary_scenario() {
        let report = scenarios::order_summary(ShopConfig::default()).unwrap();

        assert_eq!(
            report.lines,
            vec![
                "Pedido ID: 5001 | Estado: Pendiente | Total: $2526.49",
                "Cliente: Andrés | Correo: andres@mail.com",
                "Carrito ID: 101",
                "- Laptop - Precio: $2500.99, Stock: 9 x1",
                "- Mouse - Precio: $25.50, Stock: 49 x1",
                "",
                "Inventario:",
                "ID: 1 | Nombre: Laptop | Precio: $2500.99 | Stock: 9",
                "ID: 2 | Nombre: Mouse | Precio: $25.50 | Stock: 49",
            ]
        );

        let view = report.shop.order_view(OrderId(5001)).unwrap();
        assert_eq!(view.total(), dec!(2526.49));
        assert_eq!(report.shop.client(ClientId(1)).unwrap().to_string(), "Cliente: Andrés | Correo: andres@mail.com");
    }

    #[test]
    fn test_scenarios_run_under_permissive_policy() {
        let config = ShopConfig::default().with_stock_policy(StockPolicy::AllowNegative);
        let report = scenarios::storefront(config).unwrap();
        assert_eq!(report.lines[7], "Total del carrito: 2615.0");
    }

    fn shop_with(prices: &[(u32, u32)]) -> Shop {
        let mut shop = Shop::new(ShopConfig::default().with_stock_policy(StockPolicy::AllowNegative));
        for (i, (cents, stock)) in prices.iter().enumerate() {
            let id = u32::try_from(i).unwrap();
            shop.add_product(Product::physical(id, format!("p{id}"), Decimal::new(i64::from(*cents), 2), *stock))
                .unwrap();
        }
        shop.open_cart(1).unwrap();
        shop
    }

    proptest! {
        #[test]
        fn prop_cart_total_is_sum_of_price_times_quantity(
            prices in prop::collection::vec((0u32..1_000_000, 0u32..100), 1..8),
            picks in prop::collection::vec((0usize..8, 1u32..20), 0..16),
        ) {
            let mut shop = shop_with(&prices);
            let mut expected = Decimal::ZERO;
            for (index, quantity) in picks {
                let index = index % prices.len();
                let product = ProductId(u32::try_from(index).unwrap());
                shop.add_to_cart(CartId(1), product, quantity).unwrap();
                expected += Decimal::new(i64::from(prices[index].0), 2) * Decimal::from(quantity);
            }
            prop_assert_eq!(shop.cart_total(CartId(1)).unwrap(), expected);
        }

        #[test]
        fn prop_physical_stock_drops_by_exactly_the_quantity(
            stock in 0u32..1_000,
            quantity in 0u32..1_000,
        ) {
            let mut shop = Shop::default();
            shop.add_product(Product::physical(1, "Caja", dec!(1.00), stock)).unwrap();
            shop.open_cart(1).unwrap();

            let result = shop.add_to_cart(CartId(1), ProductId(1), quantity);
            if quantity <= stock {
                prop_assert!(result.is_ok());
                prop_assert_eq!(shop.stock_of(ProductId(1)).unwrap(), i64::from(stock) - i64::from(quantity));
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(shop.stock_of(ProductId(1)).unwrap(), i64::from(stock));
                prop_assert!(shop.cart(CartId(1)).unwrap().is_empty());
            }
        }

        #[test]
        fn prop_digital_stock_is_always_zero(
            quantities in prop::collection::vec(0u32..10_000, 0..10),
            format in "[A-Z]{2,4}",
        ) {
            let mut shop = Shop::default();
            shop.add_product(Product::digital(1, "Curso", dec!(9.99), format)).unwrap();
            shop.open_cart(1).unwrap();
            for quantity in quantities {
                shop.add_to_cart(CartId(1), ProductId(1), quantity).unwrap();
                prop_assert_eq!(shop.product(ProductId(1)).unwrap().stock(), 0);
            }
        }
    }
}
