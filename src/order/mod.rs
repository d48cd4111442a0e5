//! Order store logic: processing and free-form status changes.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
