//! # Catalog Controller
//!
//! In-memory controller behind a product listing screen. It keeps the working
//! set of products, derives the filtered and sorted listing on every
//! interaction, and admits create/update/delete commands only through a
//! validation gate.
//!
//! ## Pieces
//!
//! - **Debounced search** - raw keystrokes settle before reaching the view → [`Debouncer`]
//! - **Validation gate** - required fields, positive price and stock, unique names → [`validate`]
//! - **Catalog store** - ordered products with collision-free ids → [`CatalogStore`]
//! - **View pipeline** - pure filter-then-sort → [`derive`]
//! - **Mutation coordinator** - form and delete-confirmation intent → [`MutationCoordinator`]
//! - **Catalog service** - actor that owns the store and coordinator → [`CatalogService`], [`CatalogClient`]
//! - **System** - session wiring, initial load and shutdown → [`CatalogSystem`]
//!
//! ## Example Usage
//!
//! ```no_run
//! use catalog_controller::{CatalogConfig, CatalogSystem, SortOption};
//!
//! # async fn demo() -> Result<(), catalog_controller::CatalogError> {
//! let mut system = CatalogSystem::new(CatalogConfig::default());
//! system.spawn_initial_load();
//! system.wait_loaded().await;
//!
//! system.set_search("lamp");
//! system.set_sort(SortOption::StockDesc);
//! let view = system.view().await?;
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod domain;
pub mod error;
pub mod seed;
pub mod service;
pub mod store;
pub mod system;
pub mod validation;
pub mod view;

#[cfg(test)]
mod mock_framework;

pub use config::CatalogConfig;
pub use coordinator::{Committed, FormIntent, MutationCoordinator};
pub use debounce::Debouncer;
pub use domain::{Product, ProductDraft, ProductId};
pub use error::{CatalogError, ConfigError, SeedError, ValidationError};
pub use service::{CatalogClient, CatalogService};
pub use store::CatalogStore;
pub use system::{setup_tracing, CatalogSystem};
pub use validation::{validate, validate_all, ValidDraft};
pub use view::{derive, CatalogView, SortOption, ViewQuery};
