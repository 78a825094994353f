//! Actor that owns the catalog, and the client used to talk to it.

mod catalog_client;
mod catalog_service;
pub mod messages;

pub use catalog_client::*;
pub use catalog_service::*;
pub use messages::{CatalogRequest, ServiceResponse, ServiceResult};
