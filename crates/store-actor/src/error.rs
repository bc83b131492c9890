//! # Store Errors
//!
//! This module defines the common error types used throughout the store
//! runtime. Centralizing them keeps error handling consistent across all
//! stores and clients.

/// Errors that can occur within the store runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Action rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}
