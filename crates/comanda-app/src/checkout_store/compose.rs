//! Builds the order payload out of the cart and the checkout draft.

use crate::api::{OrderInfo, OrderItem, OrderRequest};
use crate::checkout_store::CheckoutError;
use crate::model::{CartState, CheckoutDraft, Restaurant};

/// Composes an [`OrderRequest`] from the current cart and draft.
///
/// The draft must be [`ready`](CheckoutDraft::ready) and the cart must hold
/// at least one line. The table travels as its internal id, resolved here
/// from the printed number the guest picked. The payment method gates this
/// composition but is not part of the payload.
pub fn compose_order(
    cart: &CartState,
    draft: &CheckoutDraft,
    restaurant: &Restaurant,
) -> Result<OrderRequest, CheckoutError> {
    let user_name = draft
        .user_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(CheckoutError::MissingName)?;
    let table_number = draft.table_number.ok_or(CheckoutError::MissingTable)?;
    if draft.payment.is_none() {
        return Err(CheckoutError::MissingPayment);
    }
    if cart.items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let table = restaurant
        .table_by_number(table_number)
        .ok_or(CheckoutError::UnknownTable(table_number))?;

    Ok(OrderRequest {
        order_info: OrderInfo {
            user_name: user_name.to_string(),
            total: cart.total,
            restaurant_id: restaurant.id,
            table_id: table.id,
        },
        items: cart
            .items
            .iter()
            .map(|line| OrderItem {
                item_id: line.item_id,
                quantity: line.quantity,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartLine, MenuItem, PaymentMethod, Table};

    fn restaurant() -> Restaurant {
        Restaurant {
            id: 7,
            name: "Cantina".to_string(),
            tables: vec![
                Table { id: 101, number: 1 },
                Table { id: 102, number: 2 },
            ],
            menu: vec![MenuItem {
                id: 11,
                name: "Feijoada".to_string(),
                price: 4500,
            }],
        }
    }

    fn filled_cart() -> CartState {
        CartState {
            items: vec![CartLine {
                item_id: 11,
                quantity: 2,
            }],
            total: 9000,
            visible: true,
        }
    }

    fn ready_draft() -> CheckoutDraft {
        CheckoutDraft {
            user_name: Some("Ana Souza".to_string()),
            table_number: Some(2),
            payment: Some(PaymentMethod::Credit),
            submitting: false,
        }
    }

    #[test]
    fn test_compose_resolves_the_table_id() {
        let order = compose_order(&filled_cart(), &ready_draft(), &restaurant()).unwrap();

        assert_eq!(order.order_info.user_name, "Ana Souza");
        assert_eq!(order.order_info.total, 9000);
        assert_eq!(order.order_info.restaurant_id, 7);
        assert_eq!(order.order_info.table_id, 102);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].item_id, 11);
        assert_eq!(order.items[0].quantity, 2);
    }

    #[test]
    fn test_compose_requires_a_name() {
        let mut draft = ready_draft();
        draft.user_name = None;
        let result = compose_order(&filled_cart(), &draft, &restaurant());
        assert_eq!(result, Err(CheckoutError::MissingName));

        draft.user_name = Some(String::new());
        let result = compose_order(&filled_cart(), &draft, &restaurant());
        assert_eq!(result, Err(CheckoutError::MissingName));
    }

    #[test]
    fn test_compose_requires_a_table() {
        let mut draft = ready_draft();
        draft.table_number = None;
        let result = compose_order(&filled_cart(), &draft, &restaurant());
        assert_eq!(result, Err(CheckoutError::MissingTable));
    }

    #[test]
    fn test_compose_requires_a_payment_method() {
        let mut draft = ready_draft();
        draft.payment = None;
        let result = compose_order(&filled_cart(), &draft, &restaurant());
        assert_eq!(result, Err(CheckoutError::MissingPayment));
    }

    #[test]
    fn test_compose_rejects_an_empty_cart() {
        let result = compose_order(&CartState::default(), &ready_draft(), &restaurant());
        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_compose_rejects_a_table_the_restaurant_lacks() {
        let mut draft = ready_draft();
        draft.table_number = Some(9);
        let result = compose_order(&filled_cart(), &draft, &restaurant());
        assert_eq!(result, Err(CheckoutError::UnknownTable(9)));
    }
}
