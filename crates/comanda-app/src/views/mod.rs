//! # Views
//!
//! Pure builders from state snapshots to displayable structs. Nothing here
//! does I/O or talks to a store: a view is plain data, and the binary
//! decides how to put it on screen.

use crate::model::{CartState, CheckoutDraft, PaymentMethod, Restaurant};

/// Bag panel title.
pub const CART_TITLE: &str = "Sua sacola";
/// Shown in place of the lines while the cart total is zero.
pub const EMPTY_CART_MESSAGE: &str = "Sua Sacola está vazia";
/// The cart's call to action. Always present, even over an empty bag.
pub const ORDER_BUTTON_LABEL: &str = "Quero pedir";
/// The checkout's call to action.
pub const SUBMIT_BUTTON_LABEL: &str = "Finalizar pedido";
/// Label for the guest name field.
pub const NAME_FIELD_LABEL: &str = "Nome e sobrenome";

/// Renders centavos as `R$ 12.34`: the integer amount over 100 with two
/// decimal places.
pub fn format_brl(cents: i64) -> String {
    format!("R$ {}.{:02}", cents / 100, cents % 100)
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub name: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// The bag panel, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CartPanelView {
    pub title: &'static str,
    pub visible: bool,
    pub lines: Vec<CartLineView>,
    pub total: Option<String>,
    pub empty_message: Option<&'static str>,
    pub order_button: &'static str,
}

/// Builds the bag panel from a cart snapshot.
///
/// While the total is zero the panel shows only the empty message; once
/// something is in the bag it lists each line with its subtotal and the
/// formatted total.
pub fn cart_panel(cart: &CartState, restaurant: &Restaurant) -> CartPanelView {
    let filled = cart.total > 0;
    let lines = if filled {
        cart.items
            .iter()
            .map(|line| {
                // A line the menu no longer knows still renders, by id.
                let (name, price) = restaurant
                    .menu_item(line.item_id)
                    .map(|item| (item.name.clone(), item.price))
                    .unwrap_or_else(|| (format!("Item {}", line.item_id), 0));
                CartLineView {
                    name,
                    quantity: line.quantity,
                    subtotal: format_brl(price * i64::from(line.quantity)),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    CartPanelView {
        title: CART_TITLE,
        visible: cart.visible,
        lines,
        total: filled.then(|| format_brl(cart.total)),
        empty_message: (!filled).then_some(EMPTY_CART_MESSAGE),
        order_button: ORDER_BUTTON_LABEL,
    }
}

impl CartPanelView {
    /// Terminal rendering used by the demo binary.
    pub fn to_lines(&self) -> Vec<String> {
        let mut out = vec![format!("== {} ==", self.title)];
        match self.empty_message {
            Some(message) => out.push(message.to_string()),
            None => {
                for line in &self.lines {
                    out.push(format!("{} x{}  {}", line.name, line.quantity, line.subtotal));
                }
                if let Some(total) = &self.total {
                    out.push(format!("TOTAL: {}", total));
                }
            }
        }
        out.push(format!("[{}]", self.order_button));
        out
    }
}

/// The checkout form, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutView {
    pub name_label: &'static str,
    pub name_value: String,
    pub table_options: Vec<(String, u32)>,
    pub selected_table: Option<u32>,
    pub payment_options: Vec<&'static str>,
    pub selected_payment: Option<&'static str>,
    pub submit_enabled: bool,
    pub submitting: bool,
    pub submit_button: &'static str,
}

/// Builds the checkout form from a draft snapshot.
///
/// `submit_enabled` mirrors [`CheckoutDraft::ready`]; it gates the button
/// visually, while the session re-validates on submission.
pub fn checkout_form(draft: &CheckoutDraft, restaurant: &Restaurant) -> CheckoutView {
    CheckoutView {
        name_label: NAME_FIELD_LABEL,
        name_value: draft.user_name.clone().unwrap_or_default(),
        table_options: restaurant
            .tables
            .iter()
            .map(|table| (format!("Mesa {}", table.number), table.number))
            .collect(),
        selected_table: draft.table_number,
        payment_options: PaymentMethod::ALL.iter().map(|method| method.label()).collect(),
        selected_payment: draft.payment.map(|method| method.label()),
        submit_enabled: draft.ready(),
        submitting: draft.submitting,
        submit_button: SUBMIT_BUTTON_LABEL,
    }
}

impl CheckoutView {
    /// Terminal rendering used by the demo binary.
    pub fn to_lines(&self) -> Vec<String> {
        let table = self
            .selected_table
            .map(|number| format!("Mesa {}", number))
            .unwrap_or_else(|| "-".to_string());
        let payment = self.selected_payment.unwrap_or("-");
        let button = if self.submitting {
            format!("[{}] enviando...", self.submit_button)
        } else if self.submit_enabled {
            format!("[{}]", self.submit_button)
        } else {
            format!("[{}] (desabilitado)", self.submit_button)
        };
        vec![
            format!("{}: {}", self.name_label, self.name_value),
            format!("Mesa: {}", table),
            format!("Pagamento: {}", payment),
            button,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartLine, MenuItem, Table};

    fn restaurant() -> Restaurant {
        Restaurant {
            id: 7,
            name: "Cantina".to_string(),
            tables: vec![
                Table { id: 101, number: 1 },
                Table { id: 102, number: 2 },
            ],
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

    #[test]
    fn test_format_brl_divides_by_one_hundred() {
        assert_eq!(format_brl(1050), "R$ 10.50");
        assert_eq!(format_brl(100), "R$ 1.00");
        assert_eq!(format_brl(7), "R$ 0.07");
        assert_eq!(format_brl(0), "R$ 0.00");
        assert_eq!(format_brl(123456), "R$ 1234.56");
    }

    #[test]
    fn test_cart_panel_lists_lines_when_filled() {
        let cart = CartState {
            items: vec![
                CartLine {
                    item_id: 11,
                    quantity: 2,
                },
                CartLine {
                    item_id: 13,
                    quantity: 1,
                },
            ],
            total: 10800,
            visible: true,
        };

        let panel = cart_panel(&cart, &restaurant());

        assert_eq!(panel.title, "Sua sacola");
        assert!(panel.visible);
        assert_eq!(panel.lines.len(), 2);
        assert_eq!(panel.lines[0].name, "Feijoada");
        assert_eq!(panel.lines[0].subtotal, "R$ 90.00");
        assert_eq!(panel.lines[1].subtotal, "R$ 18.00");
        assert_eq!(panel.total.as_deref(), Some("R$ 108.00"));
        assert_eq!(panel.empty_message, None);
    }

    #[test]
    fn test_cart_panel_shows_the_empty_message_at_zero_total() {
        let panel = cart_panel(&CartState::default(), &restaurant());

        assert!(panel.lines.is_empty());
        assert_eq!(panel.total, None);
        assert_eq!(panel.empty_message, Some("Sua Sacola está vazia"));
        // The call to action stays on screen over an empty bag
        assert_eq!(panel.order_button, "Quero pedir");

        let rendered = panel.to_lines();
        assert!(rendered.iter().any(|line| line == "Sua Sacola está vazia"));
        assert!(rendered.iter().any(|line| line.contains("Quero pedir")));
    }

    #[test]
    fn test_cart_panel_names_unknown_items_by_id() {
        let cart = CartState {
            items: vec![CartLine {
                item_id: 999,
                quantity: 1,
            }],
            total: 500,
            visible: false,
        };

        let panel = cart_panel(&cart, &restaurant());
        assert_eq!(panel.lines[0].name, "Item 999");
    }

    #[test]
    fn test_checkout_form_offers_tables_and_payments() {
        let form = checkout_form(&CheckoutDraft::default(), &restaurant());

        assert_eq!(
            form.table_options,
            vec![("Mesa 1".to_string(), 1), ("Mesa 2".to_string(), 2)]
        );
        assert_eq!(
            form.payment_options,
            vec!["Dinheiro", "Cartão de crédito", "Cartão de débito"]
        );
        assert_eq!(form.name_label, "Nome e sobrenome");
    }

    fn ready_draft() -> CheckoutDraft {
        CheckoutDraft {
            user_name: Some("Ana Souza".to_string()),
            table_number: Some(1),
            payment: Some(PaymentMethod::Cash),
            submitting: false,
        }
    }

    #[test]
    fn test_checkout_form_gates_submit_on_readiness() {
        let blank = checkout_form(&CheckoutDraft::default(), &restaurant());
        assert!(!blank.submit_enabled);

        let ready = checkout_form(&ready_draft(), &restaurant());
        assert!(ready.submit_enabled);

        let unnamed = checkout_form(
            &CheckoutDraft {
                user_name: Some(String::new()),
                ..ready_draft()
            },
            &restaurant(),
        );
        assert!(!unnamed.submit_enabled);
    }

    #[test]
    fn test_checkout_form_marks_the_submission_in_flight() {
        let form = checkout_form(
            &CheckoutDraft {
                submitting: true,
                ..ready_draft()
            },
            &restaurant(),
        );

        assert!(form.submitting);
        let rendered = form.to_lines();
        assert!(rendered.iter().any(|line| line.contains("enviando")));
    }
}
