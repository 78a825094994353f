use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::config::CatalogConfig;
use crate::coordinator::{Committed, MutationCoordinator};
use crate::domain::{Product, ProductDraft, ProductId};
use crate::error::{CatalogError, ValidationError};
use crate::store::CatalogStore;
use crate::validation::validate_all;
use crate::view::{derive_with, CatalogView, ViewQuery};

use super::messages::{CatalogRequest, ServiceResponse};
use super::CatalogClient;

/// Actor that owns the catalog.
///
/// The store and the mutation coordinator live inside this task only, so
/// every command is applied in arrival order with no locking. Callers hold a
/// [`CatalogClient`].
pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    store: CatalogStore,
    coordinator: MutationCoordinator,
    loaded: bool,
}

impl CatalogService {
    pub fn new(config: &CatalogConfig) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(config.channel_buffer);
        let service = Self {
            receiver,
            store: CatalogStore::new(config.default_image.clone()),
            coordinator: MutationCoordinator::new(),
            loaded: false,
        };
        let client = CatalogClient::new(sender);
        (service, client)
    }

    /// Main actor loop. Stops on `Shutdown` or when every client is gone.
    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!("CatalogService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::LoadProducts {
                    products,
                    respond_to,
                } => self.handle_load(products, respond_to),
                CatalogRequest::GetProduct { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(id).cloned()));
                }
                CatalogRequest::ListProducts { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.products().to_vec()));
                }
                CatalogRequest::View { query, respond_to } => {
                    self.handle_view(query, respond_to);
                }
                CatalogRequest::BeginCreate { respond_to } => {
                    debug!("Opening create form");
                    let _ = respond_to.send(Ok(self.coordinator.begin_create()));
                }
                CatalogRequest::BeginEdit { id, respond_to } => {
                    self.handle_begin_edit(id, respond_to);
                }
                CatalogRequest::CheckDraft { draft, respond_to } => {
                    self.handle_check_draft(draft, respond_to);
                }
                CatalogRequest::Submit { draft, respond_to } => {
                    self.handle_submit(draft, respond_to);
                }
                CatalogRequest::CloseForm { respond_to } => {
                    self.coordinator.close_form();
                    let _ = respond_to.send(Ok(()));
                }
                CatalogRequest::RequestDelete { id, respond_to } => {
                    self.handle_request_delete(id, respond_to);
                }
                CatalogRequest::ConfirmDelete { respond_to } => {
                    let removed = self.coordinator.confirm_delete(&mut self.store);
                    let _ = respond_to.send(Ok(removed));
                }
                CatalogRequest::CancelDelete { respond_to } => {
                    self.coordinator.cancel_delete();
                    let _ = respond_to.send(Ok(()));
                }
                CatalogRequest::Shutdown => {
                    info!("CatalogService shutting down");
                    break;
                }
            }
        }

        info!("CatalogService stopped");
    }

    /// The initial catalog arrives once; later loads are ignored.
    #[instrument(fields(count = products.len()), skip(self, products, respond_to))]
    fn handle_load(&mut self, products: Vec<Product>, respond_to: ServiceResponse<usize, CatalogError>) {
        if self.loaded {
            warn!("Catalog already loaded, ignoring repeated load");
        } else {
            self.store.load(products);
            self.loaded = true;
            info!(count = self.store.len(), "Catalog loaded");
        }
        let _ = respond_to.send(Ok(self.store.len()));
    }

    #[instrument(fields(search = %query.search, sort = %query.sort), skip(self, query, respond_to))]
    fn handle_view(&self, query: ViewQuery, respond_to: ServiceResponse<CatalogView, CatalogError>) {
        let view = if self.loaded {
            CatalogView::from_derived(derive_with(self.store.products(), &query))
        } else {
            CatalogView::Loading
        };
        debug!(shown = view.products().len(), "View derived");
        let _ = respond_to.send(Ok(view));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_begin_edit(&mut self, id: ProductId, respond_to: ServiceResponse<Option<ProductDraft>, CatalogError>) {
        let draft = self.coordinator.begin_edit(&self.store, id);
        if draft.is_none() {
            debug!("Edit target missing");
        }
        let _ = respond_to.send(Ok(draft));
    }

    fn handle_check_draft(
        &self,
        draft: ProductDraft,
        respond_to: ServiceResponse<Vec<ValidationError>, CatalogError>,
    ) {
        let editing = self.coordinator.form().editing_id();
        let _ = respond_to.send(Ok(validate_all(&draft, self.store.products(), editing)));
    }

    #[instrument(fields(product_name = %draft.name), skip(self, draft, respond_to))]
    fn handle_submit(&mut self, draft: ProductDraft, respond_to: ServiceResponse<Committed, CatalogError>) {
        let result = self.coordinator.submit(&mut self.store, &draft);
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_request_delete(&mut self, id: ProductId, respond_to: ServiceResponse<Option<Product>, CatalogError>) {
        let target = self.coordinator.request_delete(&self.store, id);
        match &target {
            Some(product) => debug!(product_name = %product.name, "Delete armed"),
            None => debug!("Delete target missing"),
        }
        let _ = respond_to.send(Ok(target));
    }
}
