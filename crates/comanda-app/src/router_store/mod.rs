//! # Router Store
//!
//! Holds the page the guest is looking at. The smallest store in the app:
//! one action, one field, no context.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::RouteState;
use store_actor::{StoreActor, StoreClient};

/// Creates a new router store and its client.
pub fn new() -> (StoreActor<RouteState>, StoreClient<RouteState>) {
    StoreActor::new(RouteState::default(), 32)
}
