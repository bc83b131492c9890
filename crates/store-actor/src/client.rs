//! # Generic Client
//!
//! This module defines the generic client for communicating with store actors.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe client for interacting with a `StoreActor`.
///
/// The `StoreClient<S>` forwards snapshot and dispatch requests over a Tokio
/// mpsc channel and returns results via oneshot channels. It also hands out
/// watch receivers for the store's committed states.
///
/// * **Cloneable** – holds a sender and a watch receiver, both cheap to clone.
/// * **Async API** – all request methods resolve to `Result<S, StoreError>`.
/// * **Generic** – works with any state that implements `StoreState`.
#[derive(Clone)]
pub struct StoreClient<S: StoreState> {
    sender: mpsc::Sender<StoreRequest<S>>,
    watch: watch::Receiver<S>,
}

impl<S: StoreState> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, watch: watch::Receiver<S>) -> Self {
        Self { sender, watch }
    }

    /// Returns a clone of the committed state.
    pub async fn snapshot(&self) -> Result<S, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Dispatches one action and returns the state after the commit.
    ///
    /// A rejected action resolves to [`StoreError::Rejected`] and leaves the
    /// committed state untouched.
    pub async fn dispatch(&self, action: S::Action) -> Result<S, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Returns a receiver of the store's committed states.
    ///
    /// The receiver starts out having seen the current value; await
    /// `changed()` and read `borrow_and_update()` to follow commits.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.watch.clone()
    }
}
