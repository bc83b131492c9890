use crate::model::PaymentMethod;

/// The in-progress checkout form: everything an order needs besides the cart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutDraft {
    pub user_name: Option<String>,
    /// The table the customer picked, as the number printed on it.
    pub table_number: Option<u32>,
    pub payment: Option<PaymentMethod>,
    /// Loading flag around the one in-flight submission.
    pub submitting: bool,
}

impl CheckoutDraft {
    /// True once name, table, and payment method are all set.
    ///
    /// An empty name does not count as set. This drives the submit button's
    /// styling only; the session re-checks before composing the request.
    pub fn ready(&self) -> bool {
        self.user_name
            .as_deref()
            .is_some_and(|name| !name.is_empty())
            && self.table_number.is_some()
            && self.payment.is_some()
    }
}
