//! # Cart Store
//!
//! Holds the lines the guest has picked, the running total in centavos and
//! the bag panel visibility.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreState`](store_actor::StoreState) implementation for [`CartState`]
//! - [`actions`] - [`CartAction`] covering line edits and panel visibility
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and client
//!
//! ## Pricing
//!
//! Prices always come from the restaurant menu injected as the store context,
//! so a cart line never carries a price of its own. Adding an item the menu
//! does not know is rejected and leaves the cart untouched.
//!
//! ## Usage
//!
//! ```rust
//! use comanda_app::cart_store;
//! use comanda_app::clients::CartClient;
//! use comanda_app::model::{MenuItem, Restaurant, Table};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let restaurant = Restaurant {
//!         id: 1,
//!         name: "Cantina da Praça".to_string(),
//!         tables: vec![Table { id: 10, number: 1 }],
//!         menu: vec![MenuItem {
//!             id: 7,
//!             name: "Feijoada".to_string(),
//!             price: 4500,
//!         }],
//!     };
//!
//!     // Create store and client
//!     let (actor, generic_client) = cart_store::new();
//!     let client = CartClient::new(generic_client);
//!
//!     // Start the store with the menu as its context
//!     tokio::spawn(actor.run(restaurant));
//!
//!     let cart = client.add_item(7).await?;
//!     assert_eq!(cart.total, 4500);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::CartState;
use store_actor::{StoreActor, StoreClient};

/// Creates a new cart store and its client.
pub fn new() -> (StoreActor<CartState>, StoreClient<CartState>) {
    StoreActor::new(CartState::default(), 32)
}
