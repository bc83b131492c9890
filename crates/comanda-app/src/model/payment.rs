/// The payment methods the checkout offers.
///
/// The choice gates submission readiness but never travels in the order
/// payload; the waiter settles it at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Credit,
    Debit,
}

impl PaymentMethod {
    /// Every method, in the order the selector shows them.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::Credit,
        PaymentMethod::Debit,
    ];

    /// Display label for the selector.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Credit => "Cartão de crédito",
            PaymentMethod::Debit => "Cartão de débito",
        }
    }
}
