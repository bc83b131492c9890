//! Error types for router operations.

use thiserror::Error;

/// Errors from the router store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteError {
    /// Failed to communicate with the store.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<String> for RouteError {
    fn from(error: String) -> Self {
        RouteError::StoreCommunication(error)
    }
}
