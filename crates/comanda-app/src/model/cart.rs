/// One line in the cart: a menu item and how many of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: i64,
    pub quantity: u32,
}

/// The shared cart: ordered lines, running total, and panel visibility.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub items: Vec<CartLine>,
    /// Aggregate price in centavos.
    pub total: i64,
    /// Whether the cart panel is currently shown.
    pub visible: bool,
}

impl CartState {
    /// Number of distinct lines (not the summed unit count).
    pub fn quantity(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
