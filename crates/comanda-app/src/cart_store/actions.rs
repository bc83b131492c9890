//! Actions accepted by the cart store.

/// Mutations the cart accepts.
///
/// Prices come from the restaurant menu injected as the store context, so
/// actions carry only the item identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a menu item: +1 on the existing line, or a new line.
    Add { item_id: i64 },
    /// Remove one unit; the line disappears at zero quantity.
    Remove { item_id: i64 },
    /// Empty the cart (after a successful order).
    Clear,
    /// Show the cart panel.
    Show,
    /// Hide the cart panel.
    Hide,
}
