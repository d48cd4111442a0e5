//! A small in-memory shop: clients, a product catalog with physical and
//! digital goods, carts that draw stock from the catalog, and orders.
//!
//! Every entity lives in a [`store::Store`] keyed by its id. The
//! [`shop::Shop`] owns one store per entity kind and runs the operations
//! that span more than one of them.

pub mod domain;
pub mod store;

pub mod product;
pub mod client;
pub mod cart;
pub mod order;

pub mod shop;
pub mod scenarios;

#[cfg(test)]
mod integration_tests;
