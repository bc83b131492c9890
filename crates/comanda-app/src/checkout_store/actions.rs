//! Actions for the checkout store.

use crate::model::PaymentMethod;

/// Edits to the checkout draft.
///
/// Every action always succeeds. Validation happens when the draft is
/// composed into an order, not while the guest is still typing.
#[derive(Debug, Clone)]
pub enum CheckoutAction {
    /// Replaces the guest name with whatever the text field holds now.
    SetName(String),
    /// Picks the table by its printed number.
    ChooseTable(u32),
    /// Picks how the guest intends to pay.
    ChoosePayment(PaymentMethod),
    /// Marks a submission as in flight.
    BeginSubmit,
    /// Marks the in-flight submission as finished.
    EndSubmit,
    /// Returns the draft to its pristine state.
    Reset,
}
