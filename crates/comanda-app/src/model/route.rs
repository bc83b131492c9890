use crate::api::CreatedOrder;

/// Where the UI currently is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Page {
    #[default]
    Menu,
    Checkout,
    /// The order-status page shown after a successful submission.
    OrderStatus(CreatedOrder),
}

/// The shared route value owned by the router store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteState {
    pub page: Page,
}
