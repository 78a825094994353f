//! # Mock Framework
//!
//! Utilities for testing code that talks to the catalog through a [`CatalogClient`]
//! without spinning up a real [`CatalogService`](crate::service::CatalogService).
//!
//! Use [`create_mock_client`] to get a client and the receiver its requests land on,
//! then helpers like [`expect_view`] or [`expect_submit`] to answer them.

use tokio::sync::mpsc;

use crate::coordinator::Committed;
use crate::domain::ProductDraft;
use crate::error::CatalogError;
use crate::service::{CatalogClient, CatalogRequest, ServiceResponse};
use crate::view::{CatalogView, ViewQuery};

/// Creates a client whose requests arrive on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a View request
pub async fn expect_view(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ViewQuery, ServiceResponse<CatalogView, CatalogError>)> {
    match receiver.recv().await {
        Some(CatalogRequest::View { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Submit request
pub async fn expect_submit(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ProductDraft, ServiceResponse<Committed, CatalogError>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Submit { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::view::SortOption;

    #[tokio::test]
    async fn test_mock_client_view() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move {
            client.view(ViewQuery::new("lamp", SortOption::StockAsc)).await
        });

        let (query, responder) = expect_view(&mut receiver).await.expect("Expected View request");
        assert_eq!(query.search, "lamp");
        assert_eq!(query.sort, SortOption::StockAsc);
        responder.send(Ok(CatalogView::Loading)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(CatalogView::Loading));
    }

    #[tokio::test]
    async fn test_rejection_reaches_caller() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.submit(ProductDraft::new("", 1.0, 1)).await });

        let (draft, responder) = expect_submit(&mut receiver).await.expect("Expected Submit request");
        assert!(draft.name.is_empty());
        responder
            .send(Err(ValidationError::NameRequired.into()))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(CatalogError::Rejected(ValidationError::NameRequired))
        );
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.list_products().await });
        drop(receiver.recv().await);

        assert_eq!(
            task.await.unwrap(),
            Err(CatalogError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_service_is_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert_eq!(
            client.begin_create().await,
            Err(CatalogError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
