//! # Router Client
//!
//! Provides a high-level API for interacting with the router store.

use crate::model::{Page, RouteState};
use crate::router_store::{RouteAction, RouteError};
use async_trait::async_trait;
use store_actor::{StoreClient, StoreError, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the router store.
#[derive(Clone)]
pub struct RouterClient {
    inner: StoreClient<RouteState>,
}

impl RouterClient {
    pub fn new(inner: StoreClient<RouteState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<RouteState> for RouterClient {
    type Error = RouteError;

    fn inner(&self) -> &StoreClient<RouteState> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        RouteError::StoreCommunication(e.to_string())
    }
}

impl RouterClient {
    /// Replace the current page.
    #[instrument(skip(self))]
    pub async fn navigate(&self, page: Page) -> Result<RouteState, RouteError> {
        debug!("Sending request");
        self.inner
            .dispatch(RouteAction::Navigate(page))
            .await
            .map_err(Self::map_error)
    }

    /// The page the guest is looking at right now.
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<Page, RouteError> {
        debug!("Sending request");
        self.inner
            .snapshot()
            .await
            .map(|state| state.page)
            .map_err(Self::map_error)
    }
}
