//! Wire types for the order endpoints.

use serde::{Deserialize, Serialize};

/// Create-order payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_info: OrderInfo,
    pub items: Vec<OrderItem>,
}

/// Header block of the create-order payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub user_name: String,
    /// Cart total in centavos, carried as-is.
    pub total: i64,
    pub restaurant_id: i64,
    pub table_id: i64,
}

/// One ordered line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_id: i64,
    pub quantity: u32,
}

/// The created order, as the backend echoes it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    pub id: i64,
    pub order_info: OrderInfo,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_request_wire_shape() {
        let request = OrderRequest {
            order_info: OrderInfo {
                user_name: "Maria Silva".to_string(),
                total: 5700,
                restaurant_id: 7,
                table_id: 102,
            },
            items: vec![
                OrderItem {
                    item_id: 11,
                    quantity: 2,
                },
                OrderItem {
                    item_id: 13,
                    quantity: 1,
                },
            ],
        };

        let expected = json!({
            "orderInfo": {
                "userName": "Maria Silva",
                "total": 5700,
                "restaurantId": 7,
                "tableId": 102
            },
            "items": [
                { "itemId": 11, "quantity": 2 },
                { "itemId": 13, "quantity": 1 }
            ]
        });

        assert_eq!(serde_json::to_value(&request).unwrap(), expected);
    }

    #[test]
    fn test_created_order_decodes_with_and_without_items() {
        let full: CreatedOrder = serde_json::from_value(json!({
            "id": 900,
            "orderInfo": {
                "userName": "Maria Silva",
                "total": 5700,
                "restaurantId": 7,
                "tableId": 102
            },
            "items": [{ "itemId": 11, "quantity": 2 }]
        }))
        .unwrap();
        assert_eq!(full.id, 900);
        assert_eq!(full.items.len(), 1);

        let bare: CreatedOrder = serde_json::from_value(json!({
            "id": 901,
            "orderInfo": {
                "userName": "Maria Silva",
                "total": 0,
                "restaurantId": 7,
                "tableId": 102
            }
        }))
        .unwrap();
        assert_eq!(bare.id, 901);
        assert!(bare.items.is_empty());
    }
}
