use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::coordinator::Committed;
use crate::domain::{Product, ProductDraft, ProductId};
use crate::error::{CatalogError, ValidationError};
use crate::view::{CatalogView, ViewQuery};

use super::messages::CatalogRequest;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Cloneable handle to a running [`CatalogService`](super::CatalogService).
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CatalogError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CatalogRequest::Shutdown)
            .await
            .map_err(|_| CatalogError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CatalogClient => fn load_products(products: Vec<Product>) -> usize as CatalogRequest::LoadProducts, Error = CatalogError);
client_method!(CatalogClient => fn get_product(id: ProductId) -> Option<Product> as CatalogRequest::GetProduct, Error = CatalogError);
client_method!(CatalogClient => fn list_products() -> Vec<Product> as CatalogRequest::ListProducts, Error = CatalogError);
client_method!(CatalogClient => fn view(query: ViewQuery) -> CatalogView as CatalogRequest::View, Error = CatalogError);
client_method!(CatalogClient => fn begin_create() -> ProductDraft as CatalogRequest::BeginCreate, Error = CatalogError);
client_method!(CatalogClient => fn begin_edit(id: ProductId) -> Option<ProductDraft> as CatalogRequest::BeginEdit, Error = CatalogError);
client_method!(CatalogClient => fn check_draft(draft: ProductDraft) -> Vec<ValidationError> as CatalogRequest::CheckDraft, Error = CatalogError);
client_method!(CatalogClient => fn submit(draft: ProductDraft) -> Committed as CatalogRequest::Submit, Error = CatalogError);
client_method!(CatalogClient => fn close_form() -> () as CatalogRequest::CloseForm, Error = CatalogError);
client_method!(CatalogClient => fn request_delete(id: ProductId) -> Option<Product> as CatalogRequest::RequestDelete, Error = CatalogError);
client_method!(CatalogClient => fn confirm_delete() -> Option<ProductId> as CatalogRequest::ConfirmDelete, Error = CatalogError);
client_method!(CatalogClient => fn cancel_delete() -> () as CatalogRequest::CancelDelete, Error = CatalogError);
