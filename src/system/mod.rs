//! Session startup, wiring and shutdown.

pub mod catalog_system;
pub mod telemetry;

pub use catalog_system::*;
pub use telemetry::*;
