//! Production gateway over reqwest.

use super::types::{CreatedOrder, OrderRequest};
use super::{ApiError, OrderApi};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// HTTP implementation of [`OrderApi`].
#[derive(Clone)]
pub struct HttpOrderApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    // Credentials are opaque; they are forwarded untouched and never logged.
    #[instrument(skip(self, credentials))]
    async fn sign_in(
        &self,
        credentials: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        debug!("Sending request");
        let response = self
            .client
            .post(self.url("/signin"))
            .json(credentials)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    #[instrument(skip(self, order))]
    async fn create_order(&self, order: &OrderRequest) -> Result<CreatedOrder, ApiError> {
        debug!(total = order.order_info.total, "Sending request");
        let response = self
            .client
            .post(self.url("/orders"))
            .json(order)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}
