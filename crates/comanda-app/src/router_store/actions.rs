//! Actions for the router store.

use crate::model::Page;

/// Navigation requests.
#[derive(Debug, Clone)]
pub enum RouteAction {
    /// Replaces the current page.
    Navigate(Page),
}
