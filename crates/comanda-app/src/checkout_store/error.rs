//! Error types for checkout operations.

use thiserror::Error;

/// Errors from the checkout store and from composing an order out of it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// The guest has not given a non-empty name yet.
    #[error("Guest name is missing")]
    MissingName,

    /// No table has been picked yet.
    #[error("Table is missing")]
    MissingTable,

    /// No payment method has been picked yet.
    #[error("Payment method is missing")]
    MissingPayment,

    /// The picked table number is not one of the restaurant's tables.
    #[error("Unknown table number: {0}")]
    UnknownTable(u32),

    /// There is nothing in the cart to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// Failed to communicate with the store.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<String> for CheckoutError {
    fn from(error: String) -> Self {
        CheckoutError::StoreCommunication(error)
    }
}
