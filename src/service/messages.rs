use tokio::sync::oneshot;

use crate::coordinator::Committed;
use crate::domain::{Product, ProductDraft, ProductId};
use crate::error::{CatalogError, ValidationError};
use crate::view::{CatalogView, ViewQuery};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests understood by [`CatalogService`](super::CatalogService). Each variant
/// carries its parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum CatalogRequest {
    LoadProducts {
        products: Vec<Product>,
        respond_to: ServiceResponse<usize, CatalogError>,
    },
    GetProduct {
        id: ProductId,
        respond_to: ServiceResponse<Option<Product>, CatalogError>,
    },
    ListProducts {
        respond_to: ServiceResponse<Vec<Product>, CatalogError>,
    },
    View {
        query: ViewQuery,
        respond_to: ServiceResponse<CatalogView, CatalogError>,
    },
    BeginCreate {
        respond_to: ServiceResponse<ProductDraft, CatalogError>,
    },
    BeginEdit {
        id: ProductId,
        respond_to: ServiceResponse<Option<ProductDraft>, CatalogError>,
    },
    CheckDraft {
        draft: ProductDraft,
        respond_to: ServiceResponse<Vec<ValidationError>, CatalogError>,
    },
    Submit {
        draft: ProductDraft,
        respond_to: ServiceResponse<Committed, CatalogError>,
    },
    CloseForm {
        respond_to: ServiceResponse<(), CatalogError>,
    },
    RequestDelete {
        id: ProductId,
        respond_to: ServiceResponse<Option<Product>, CatalogError>,
    },
    ConfirmDelete {
        respond_to: ServiceResponse<Option<ProductId>, CatalogError>,
    },
    CancelDelete {
        respond_to: ServiceResponse<(), CatalogError>,
    },
    Shutdown,
}
