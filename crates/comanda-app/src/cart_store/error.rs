//! Error types for the cart store.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The action referenced an item the menu does not contain.
    #[error("Unknown menu item: {0}")]
    UnknownItem(i64),

    /// The action referenced an item the cart does not contain.
    #[error("Item not in cart: {0}")]
    NotInCart(i64),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::StoreCommunication(msg)
    }
}
