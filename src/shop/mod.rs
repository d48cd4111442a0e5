//! Shop orchestration: wiring the stores together, configuration, and tracing setup.

pub mod config;
pub mod error;
pub mod system;
pub mod telemetry;
pub mod view;

pub use config::*;
pub use error::*;
pub use system::*;
pub use telemetry::*;
pub use view::*;
