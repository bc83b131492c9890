//! State transitions for the current page.

use crate::model::RouteState;
use crate::router_store::{RouteAction, RouteError};
use async_trait::async_trait;
use store_actor::StoreState;

#[async_trait]
impl StoreState for RouteState {
    type Action = RouteAction;
    type Context = ();
    type Error = RouteError;

    async fn apply(&mut self, action: RouteAction, _ctx: &()) -> Result<(), RouteError> {
        match action {
            RouteAction::Navigate(page) => self.page = page,
        }
        Ok(())
    }
}
