//! # StoreHandle Trait
//!
//! Provides a common interface for store-specific clients, adding default
//! `snapshot` and `subscribe` methods built on top of a generic `StoreClient`.
use crate::{StoreClient, StoreError, StoreState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for store-specific clients to inherit the standard read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations every store shares, leaving only the domain's dispatch
/// methods to write by hand.
///
/// # Example
///
/// ```rust
/// use store_actor::{StoreClient, StoreError, StoreHandle, StoreState};
/// use async_trait::async_trait;
///
/// // 1. Define the state
/// #[derive(Clone, Debug)]
/// struct Panel { open: bool }
///
/// #[derive(Debug)]
/// enum PanelAction { Open }
///
/// #[derive(Debug, thiserror::Error)]
/// enum PanelError {
///     #[error("Store communication error: {0}")]
///     StoreCommunication(String),
/// }
///
/// impl From<String> for PanelError {
///     fn from(s: String) -> Self { PanelError::StoreCommunication(s) }
/// }
///
/// #[async_trait]
/// impl StoreState for Panel {
///     type Action = PanelAction;
///     type Context = ();
///     type Error = PanelError;
///
///     async fn apply(&mut self, action: PanelAction, _: &()) -> Result<(), PanelError> {
///         match action { PanelAction::Open => self.open = true }
///         Ok(())
///     }
/// }
///
/// // 2. Define the client wrapper
/// struct PanelClient {
///     inner: StoreClient<Panel>,
/// }
///
/// // 3. Implement StoreHandle
/// #[async_trait]
/// impl StoreHandle<Panel> for PanelClient {
///     type Error = PanelError;
///
///     fn inner(&self) -> &StoreClient<Panel> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         PanelError::StoreCommunication(e.to_string())
///     }
/// }
///
/// // 4. Usage
/// async fn usage(client: PanelClient) {
///     // snapshot() and subscribe() are provided automatically!
///     let _ = client.snapshot().await;
///     let _feed = client.subscribe();
/// }
/// ```
#[async_trait]
pub trait StoreHandle<S: StoreState>: Send + Sync {
    /// The store-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map runtime errors to the specific store error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch the committed state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Follow the store's committed states.
    fn subscribe(&self) -> watch::Receiver<S> {
        self.inner().subscribe()
    }
}
