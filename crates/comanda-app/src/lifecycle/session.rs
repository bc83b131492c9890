use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, instrument};

use crate::api::{ApiError, CreatedOrder, OrderApi};
use crate::checkout_store::{compose_order, CheckoutError};
use crate::clients::{CartClient, CheckoutClient, RouterClient};
use crate::model::{Page, Restaurant};
use crate::{cart_store, checkout_store, router_store};
use store_actor::StoreHandle;

/// Errors from the order-submission sequence.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// The draft or the cart was not ready to become an order.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// The backend refused the order or was unreachable.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Failed to communicate with a store.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

fn store_err(e: impl fmt::Display) -> PlaceOrderError {
    PlaceOrderError::StoreCommunication(e.to_string())
}

/// The runtime orchestrator for one guest's visit to one restaurant.
///
/// `TableSession` is responsible for:
/// - **Lifecycle**: Starting and stopping the cart, checkout, and router stores
/// - **Dependency Wiring**: The cart runs with the restaurant menu as context
/// - **The Submission Sequence**: Turning cart plus draft into one API call
///
/// # Example
///
/// ```ignore
/// let session = TableSession::new(restaurant, api);
///
/// session.cart.add_item(item_id).await?;
/// session.checkout.set_name("Ana Souza".to_string()).await?;
/// session.checkout.choose_table(2).await?;
/// session.checkout.choose_payment(PaymentMethod::Cash).await?;
/// let created = session.place_order().await?;
///
/// session.shutdown().await?;
/// ```
pub struct TableSession {
    /// Client for the cart store
    pub cart: CartClient,

    /// Client for the checkout store
    pub checkout: CheckoutClient,

    /// Client for the router store
    pub router: RouterClient,

    api: Arc<dyn OrderApi>,
    restaurant: Restaurant,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TableSession {
    /// Creates a session with all three stores running.
    pub fn new(restaurant: Restaurant, api: Arc<dyn OrderApi>) -> Self {
        // 1. Create stores (no dependencies)
        let (cart_actor, cart_client) = cart_store::new();
        let (checkout_actor, checkout_client) = checkout_store::new();
        let (router_actor, router_client) = router_store::new();

        // 2. Start stores with injected context
        // The cart prices items from the menu, so it runs with the restaurant
        let cart_handle = tokio::spawn(cart_actor.run(restaurant.clone()));
        let checkout_handle = tokio::spawn(checkout_actor.run(()));
        let router_handle = tokio::spawn(router_actor.run(()));

        Self {
            cart: CartClient::new(cart_client),
            checkout: CheckoutClient::new(checkout_client),
            router: RouterClient::new(router_client),
            api,
            restaurant,
            handles: vec![cart_handle, checkout_handle, router_handle],
        }
    }

    /// The restaurant this session is seated at.
    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// Forwards an opaque credential body through the gateway.
    #[instrument(skip(self, credentials))]
    pub async fn sign_in(
        &self,
        credentials: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.api.sign_in(credentials).await
    }

    /// The order-submission sequence.
    ///
    /// Snapshots the cart and the draft, composes the payload, marks the
    /// submission in flight and issues the one network call. On success the
    /// cart is cleared, the draft reset and the router moved to the order
    /// page. On failure the stores keep their state, only the in-flight
    /// marker is dropped, and the error is returned to the caller.
    #[instrument(skip(self))]
    pub async fn place_order(&self) -> Result<CreatedOrder, PlaceOrderError> {
        let cart = self.cart.snapshot().await.map_err(store_err)?;
        let draft = self.checkout.snapshot().await.map_err(store_err)?;

        // The submit button gate is visual only, so the draft is re-checked here
        let order = compose_order(&cart, &draft, &self.restaurant)?;

        self.checkout.begin_submit().await.map_err(store_err)?;
        info!(total = order.order_info.total, "Submitting order");

        match self.api.create_order(&order).await {
            Ok(created) => {
                self.cart.clear().await.map_err(store_err)?;
                self.checkout.reset().await.map_err(store_err)?;
                self.router
                    .navigate(Page::OrderStatus(created.clone()))
                    .await
                    .map_err(store_err)?;
                info!(order_id = created.id, "Order placed");
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "Order submission failed");
                self.checkout.end_submit().await.map_err(store_err)?;
                Err(e.into())
            }
        }
    }

    /// Gracefully shuts down the session.
    ///
    /// Drops all clients, which closes their channels, then waits for the
    /// store tasks to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all stores shut down cleanly
    /// - `Err(String)` if any store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down session...");

        // Dropping the clients closes the stores' request channels
        drop(self.cart);
        drop(self.checkout);
        drop(self.router);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Session shutdown complete.");
        Ok(())
    }
}
