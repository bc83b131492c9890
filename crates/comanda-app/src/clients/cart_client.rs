//! # Cart Client
//!
//! Provides a high-level API for interacting with the cart store.
//! It wraps a `StoreClient<CartState>` and exposes domain-specific methods.

use crate::cart_store::{CartAction, CartError};
use crate::model::CartState;
use async_trait::async_trait;
use store_actor::{StoreClient, StoreError, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the cart store.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<CartState>,
}

impl CartClient {
    pub fn new(inner: StoreClient<CartState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<CartState> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<CartState> {
        &self.inner
    }

    // Rejections carry the cart's own error; anything else is a transport failure.
    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::Rejected(rejection) => match rejection.downcast::<CartError>() {
                Ok(error) => *error,
                Err(other) => CartError::StoreCommunication(other.to_string()),
            },
            other => CartError::StoreCommunication(other.to_string()),
        }
    }
}

impl CartClient {
    /// Add one unit of a menu item to the cart.
    ///
    /// Returns the cart after the change.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item_id: i64) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner
            .dispatch(CartAction::Add { item_id })
            .await
            .map_err(Self::map_error)
    }

    /// Remove one unit of a menu item from the cart.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, item_id: i64) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner
            .dispatch(CartAction::Remove { item_id })
            .await
            .map_err(Self::map_error)
    }

    /// Empty the cart. The panel visibility is left as it is.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner
            .dispatch(CartAction::Clear)
            .await
            .map_err(Self::map_error)
    }

    /// Open the bag panel.
    #[instrument(skip(self))]
    pub async fn show(&self) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner
            .dispatch(CartAction::Show)
            .await
            .map_err(Self::map_error)
    }

    /// Close the bag panel.
    #[instrument(skip(self))]
    pub async fn hide(&self) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner
            .dispatch(CartAction::Hide)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::mock::{create_mock_client, expect_dispatch};

    #[tokio::test]
    async fn test_add_item_sends_the_action() {
        let (client, mut receiver, _publisher) =
            create_mock_client::<CartState>(CartState::default(), 10);
        let cart_client = CartClient::new(client);

        // Spawn task to call add_item
        let add_task = tokio::spawn(async move { cart_client.add_item(7).await });

        // Expect the dispatch request
        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");

        assert!(matches!(action, CartAction::Add { item_id: 7 }));

        // Respond with the cart after the change
        let cart = CartState {
            total: 4500,
            ..CartState::default()
        };
        responder.send(Ok(cart)).unwrap();

        // Verify the result
        let result = add_task.await.unwrap();
        assert_eq!(result.unwrap().total, 4500);
    }

    #[tokio::test]
    async fn test_rejections_surface_the_cart_error() {
        let (client, mut receiver, _publisher) =
            create_mock_client::<CartState>(CartState::default(), 10);
        let cart_client = CartClient::new(client);

        let add_task = tokio::spawn(async move { cart_client.add_item(99).await });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert!(matches!(action, CartAction::Add { item_id: 99 }));

        // Respond with a rejection carrying the typed error
        responder
            .send(Err(StoreError::Rejected(Box::new(CartError::UnknownItem(
                99,
            )))))
            .unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Err(CartError::UnknownItem(99)));
    }

    #[tokio::test]
    async fn test_transport_failures_become_communication_errors() {
        let (client, mut receiver, _publisher) =
            create_mock_client::<CartState>(CartState::default(), 10);
        let cart_client = CartClient::new(client);

        let clear_task = tokio::spawn(async move { cart_client.clear().await });

        let (_, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        responder.send(Err(StoreError::StoreClosed)).unwrap();

        let result = clear_task.await.unwrap();
        match result {
            Err(CartError::StoreCommunication(msg)) => assert!(msg.contains("closed")),
            other => panic!("Expected StoreCommunication, got {:?}", other),
        }
    }
}
