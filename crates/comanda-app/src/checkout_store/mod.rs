//! # Checkout Store
//!
//! Holds the guest's order form while it is being filled in: name, table,
//! payment method and the in-flight submission marker.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreState`](store_actor::StoreState) implementation for [`CheckoutDraft`]
//! - [`actions`] - [`CheckoutAction`] covering form edits and submit markers
//! - [`error`] - [`CheckoutError`] shared with order composition
//! - [`compose`] - [`compose_order`] turns cart plus draft into a payload
//! - [`new()`] - Factory function that creates the store and client
//!
//! Draft edits never fail; a half-filled form is a normal state. The
//! typed errors only appear when [`compose_order`] is asked to produce a
//! payload from a draft that is not ready.

pub mod actions;
pub mod compose;
pub mod entity;
pub mod error;

pub use actions::*;
pub use compose::compose_order;
pub use error::*;

use crate::model::CheckoutDraft;
use store_actor::{StoreActor, StoreClient};

/// Creates a new checkout store and its client.
pub fn new() -> (StoreActor<CheckoutDraft>, StoreClient<CheckoutDraft>) {
    StoreActor::new(CheckoutDraft::default(), 32)
}
