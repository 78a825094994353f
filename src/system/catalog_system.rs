use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::config::CatalogConfig;
use crate::debounce::Debouncer;
use crate::error::CatalogError;
use crate::seed::fetch_initial_products;
use crate::service::{CatalogClient, CatalogService};
use crate::view::{CatalogView, SortOption, ViewQuery};

/// One catalog session: the service task, the search debouncer and the sort choice.
///
/// Created on session start, discarded by [`shutdown`](CatalogSystem::shutdown).
pub struct CatalogSystem {
    pub client: CatalogClient,
    config: CatalogConfig,
    search: Debouncer<String>,
    sort: SortOption,
    service_handle: JoinHandle<()>,
    loader: Option<JoinHandle<Result<usize, CatalogError>>>,
}

impl CatalogSystem {
    /// Starts the catalog service. Must be called inside a tokio runtime.
    pub fn new(config: CatalogConfig) -> Self {
        info!("Starting catalog system");
        let (service, client) = CatalogService::new(&config);
        let service_handle = tokio::spawn(service.run());
        let search = Debouncer::new(String::new(), config.debounce);

        Self {
            client,
            sort: config.default_sort,
            config,
            search,
            service_handle,
            loader: None,
        }
    }

    /// Fetches the starter catalog in the background and hands it to the service.
    pub fn spawn_initial_load(&mut self) {
        let client = self.client.clone();
        let delay = self.config.load_delay;
        self.loader = Some(tokio::spawn(async move {
            let products = fetch_initial_products(delay).await;
            client.load_products(products).await
        }));
    }

    /// Waits for the background load started by [`spawn_initial_load`](Self::spawn_initial_load).
    ///
    /// Returns the catalog size, or `None` when no load was started.
    pub async fn wait_loaded(&mut self) -> Option<Result<usize, CatalogError>> {
        let loader = self.loader.take()?;
        Some(match loader.await {
            Ok(result) => result,
            Err(e) => Err(CatalogError::ActorCommunicationError(e.to_string())),
        })
    }

    /// Raw search keystrokes; the view only sees them once they settle.
    pub fn set_search(&self, raw: impl Into<String>) {
        self.search.push(raw.into());
    }

    /// Notified whenever the debounced search term changes.
    pub fn search_updates(&self) -> watch::Receiver<String> {
        self.search.subscribe()
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    pub fn query(&self) -> ViewQuery {
        ViewQuery::new(self.search.current(), self.sort)
    }

    /// Derives the listing from the current catalog, debounced search and sort.
    pub async fn view(&self) -> Result<CatalogView, CatalogError> {
        self.client.view(self.query()).await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), CatalogError> {
        info!("Shutting down catalog system...");
        if let Some(loader) = self.loader {
            loader.abort();
        }
        drop(self.search);

        self.client.shutdown().await?;
        if let Err(e) = self.service_handle.await {
            error!("Catalog service task failed: {:?}", e);
            return Err(CatalogError::ActorCommunicationError(e.to_string()));
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}
