//! # Checkout Client
//!
//! Provides a high-level API for interacting with the checkout store.
//! It wraps a `StoreClient<CheckoutDraft>` and exposes one method per form
//! edit, so the UI layer never builds actions by hand.

use crate::checkout_store::{CheckoutAction, CheckoutError};
use crate::model::{CheckoutDraft, PaymentMethod};
use async_trait::async_trait;
use store_actor::{StoreClient, StoreError, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the checkout store.
#[derive(Clone)]
pub struct CheckoutClient {
    inner: StoreClient<CheckoutDraft>,
}

impl CheckoutClient {
    pub fn new(inner: StoreClient<CheckoutDraft>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<CheckoutDraft> for CheckoutClient {
    type Error = CheckoutError;

    fn inner(&self) -> &StoreClient<CheckoutDraft> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        CheckoutError::StoreCommunication(e.to_string())
    }
}

impl CheckoutClient {
    /// Mirror the name field into the draft, even while it is blank.
    #[instrument(skip(self, name))]
    pub async fn set_name(&self, name: String) -> Result<CheckoutDraft, CheckoutError> {
        debug!("Sending request");
        self.inner
            .dispatch(CheckoutAction::SetName(name))
            .await
            .map_err(Self::map_error)
    }

    /// Pick the table by its printed number.
    #[instrument(skip(self))]
    pub async fn choose_table(&self, number: u32) -> Result<CheckoutDraft, CheckoutError> {
        debug!("Sending request");
        self.inner
            .dispatch(CheckoutAction::ChooseTable(number))
            .await
            .map_err(Self::map_error)
    }

    /// Pick the payment method.
    #[instrument(skip(self))]
    pub async fn choose_payment(
        &self,
        method: PaymentMethod,
    ) -> Result<CheckoutDraft, CheckoutError> {
        debug!("Sending request");
        self.inner
            .dispatch(CheckoutAction::ChoosePayment(method))
            .await
            .map_err(Self::map_error)
    }

    /// Mark a submission as in flight.
    #[instrument(skip(self))]
    pub async fn begin_submit(&self) -> Result<CheckoutDraft, CheckoutError> {
        debug!("Sending request");
        self.inner
            .dispatch(CheckoutAction::BeginSubmit)
            .await
            .map_err(Self::map_error)
    }

    /// Mark the in-flight submission as finished.
    #[instrument(skip(self))]
    pub async fn end_submit(&self) -> Result<CheckoutDraft, CheckoutError> {
        debug!("Sending request");
        self.inner
            .dispatch(CheckoutAction::EndSubmit)
            .await
            .map_err(Self::map_error)
    }

    /// Return the draft to its pristine state.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<CheckoutDraft, CheckoutError> {
        debug!("Sending request");
        self.inner
            .dispatch(CheckoutAction::Reset)
            .await
            .map_err(Self::map_error)
    }
}
