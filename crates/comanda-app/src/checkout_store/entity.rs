//! State transitions for the checkout draft.
//!
//! Unlike the cart, the draft accepts every edit, including a name that is
//! still empty. [`CheckoutDraft::ready`](crate::model::CheckoutDraft::ready)
//! and [`compose_order`](super::compose_order) are where incomplete drafts
//! get stopped.

use crate::checkout_store::{CheckoutAction, CheckoutError};
use crate::model::CheckoutDraft;
use async_trait::async_trait;
use store_actor::StoreState;

#[async_trait]
impl StoreState for CheckoutDraft {
    type Action = CheckoutAction;
    type Context = ();
    type Error = CheckoutError;

    async fn apply(&mut self, action: CheckoutAction, _ctx: &()) -> Result<(), CheckoutError> {
        match action {
            CheckoutAction::SetName(name) => self.user_name = Some(name),
            CheckoutAction::ChooseTable(number) => self.table_number = Some(number),
            CheckoutAction::ChoosePayment(method) => self.payment = Some(method),
            CheckoutAction::BeginSubmit => self.submitting = true,
            CheckoutAction::EndSubmit => self.submitting = false,
            CheckoutAction::Reset => *self = CheckoutDraft::default(),
        }
        Ok(())
    }
}
