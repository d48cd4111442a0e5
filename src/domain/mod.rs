pub mod person;
pub mod product;
pub mod cart;
pub mod order;

pub use person::*;
pub use product::*;
pub use cart::*;
pub use order::*;
