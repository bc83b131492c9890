//! State transitions for the cart.

use crate::cart_store::{CartAction, CartError};
use crate::model::{CartLine, CartState, Restaurant};
use async_trait::async_trait;
use store_actor::StoreState;

#[async_trait]
impl StoreState for CartState {
    type Action = CartAction;
    type Context = Restaurant;
    type Error = CartError;

    async fn apply(
        &mut self,
        action: CartAction,
        restaurant: &Restaurant,
    ) -> Result<(), CartError> {
        match action {
            CartAction::Add { item_id } => {
                let item = restaurant
                    .menu_item(item_id)
                    .ok_or(CartError::UnknownItem(item_id))?;
                match self.items.iter_mut().find(|line| line.item_id == item_id) {
                    Some(line) => line.quantity += 1,
                    None => self.items.push(CartLine {
                        item_id,
                        quantity: 1,
                    }),
                }
                self.total += item.price;
                Ok(())
            }
            CartAction::Remove { item_id } => {
                let item = restaurant
                    .menu_item(item_id)
                    .ok_or(CartError::UnknownItem(item_id))?;
                let position = self
                    .items
                    .iter()
                    .position(|line| line.item_id == item_id)
                    .ok_or(CartError::NotInCart(item_id))?;
                if self.items[position].quantity > 1 {
                    self.items[position].quantity -= 1;
                } else {
                    self.items.remove(position);
                }
                self.total -= item.price;
                Ok(())
            }
            CartAction::Clear => {
                self.items.clear();
                self.total = 0;
                Ok(())
            }
            CartAction::Show => {
                self.visible = true;
                Ok(())
            }
            CartAction::Hide => {
                self.visible = false;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItem, Table};

    fn restaurant() -> Restaurant {
        Restaurant {
            id: 7,
            name: "Cantina".to_string(),
            tables: vec![Table { id: 101, number: 1 }],
            menu: vec![
                MenuItem {
                    id: 11,
                    name: "Feijoada".to_string(),
                    price: 4500,
                },
                MenuItem {
                    id: 13,
                    name: "Caipirinha".to_string(),
                    price: 1800,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_add_prices_from_the_menu() {
        let ctx = restaurant();
        let mut cart = CartState::default();

        cart.apply(CartAction::Add { item_id: 11 }, &ctx).await.unwrap();
        cart.apply(CartAction::Add { item_id: 13 }, &ctx).await.unwrap();
        cart.apply(CartAction::Add { item_id: 11 }, &ctx).await.unwrap();

        // The repeated item grows its line instead of adding one
        assert_eq!(cart.quantity(), 2);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total, 4500 * 2 + 1800);
    }

    #[tokio::test]
    async fn test_add_unknown_item_is_rejected() {
        let ctx = restaurant();
        let mut cart = CartState::default();

        let result = cart.apply(CartAction::Add { item_id: 99 }, &ctx).await;
        assert_eq!(result, Err(CartError::UnknownItem(99)));
        assert!(cart.is_empty());
        assert_eq!(cart.total, 0);
    }

    #[tokio::test]
    async fn test_remove_drops_the_line_at_zero() {
        let ctx = restaurant();
        let mut cart = CartState::default();
        cart.apply(CartAction::Add { item_id: 11 }, &ctx).await.unwrap();
        cart.apply(CartAction::Add { item_id: 11 }, &ctx).await.unwrap();

        cart.apply(CartAction::Remove { item_id: 11 }, &ctx).await.unwrap();
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.total, 4500);

        cart.apply(CartAction::Remove { item_id: 11 }, &ctx).await.unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total, 0);
    }

    #[tokio::test]
    async fn test_remove_requires_the_item_in_the_cart() {
        let ctx = restaurant();
        let mut cart = CartState::default();

        let result = cart.apply(CartAction::Remove { item_id: 11 }, &ctx).await;
        assert_eq!(result, Err(CartError::NotInCart(11)));
    }

    #[tokio::test]
    async fn test_clear_keeps_visibility() {
        let ctx = restaurant();
        let mut cart = CartState::default();
        cart.apply(CartAction::Show, &ctx).await.unwrap();
        cart.apply(CartAction::Add { item_id: 11 }, &ctx).await.unwrap();

        cart.apply(CartAction::Clear, &ctx).await.unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total, 0);
        assert!(cart.visible, "clearing the cart must not close the panel");
    }

    #[tokio::test]
    async fn test_show_and_hide_toggle_the_panel() {
        let ctx = restaurant();
        let mut cart = CartState::default();

        cart.apply(CartAction::Show, &ctx).await.unwrap();
        assert!(cart.visible);
        cart.apply(CartAction::Hide, &ctx).await.unwrap();
        assert!(!cart.visible);
    }
}
