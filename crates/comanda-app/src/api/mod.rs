//! # Order Gateway
//!
//! The outbound HTTP surface: sign-in and order creation. Wire types mirror
//! the backend's camelCase JSON contract; the [`OrderApi`] trait is the seam
//! the session talks through, with [`HttpOrderApi`] as the production
//! implementation and hand-rolled doubles in the tests.
//!
//! There is deliberately no retry, timeout, or cancellation here: a
//! submission makes exactly one attempt and reports what happened.

pub mod error;
pub mod http;
pub mod types;

pub use error::ApiError;
pub use http::HttpOrderApi;
pub use types::{CreatedOrder, OrderInfo, OrderItem, OrderRequest};

use async_trait::async_trait;

/// The calls the app makes against the ordering backend.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Forwards an opaque credential body to the sign-in endpoint and returns
    /// the response body as-is. Neither side is inspected.
    async fn sign_in(
        &self,
        credentials: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError>;

    /// Submits one order and returns the created order.
    async fn create_order(&self, order: &OrderRequest) -> Result<CreatedOrder, ApiError>;
}
