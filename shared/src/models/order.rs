//! Order Models

use serde::{Deserialize, Serialize};

/// A point-in-time copy of a menu item plus the requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image_url: String,
}

/// Customer contact details as supplied by the caller.
///
/// A value object: not deduplicated or identity-tracked across orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
}

/// A stored order.
///
/// `id` and `date` are assigned by the server exactly once at acceptance
/// time; caller-supplied values never survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned, derived from creation time, strictly increasing
    pub id: i64,
    /// Fixed-format local timestamp, e.g. "2026-08-26T14:03:21.417"
    pub date: String,
    pub total: f64,
    pub items: Vec<CartItem>,
    pub customer: Customer,
}

/// Incoming order payload (POST body).
///
/// Deliberately has no `id`/`date` fields: serde drops any the caller
/// sends, so server-side assignment cannot be bypassed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub customer: Customer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_ignores_caller_supplied_id_and_date() {
        let draft: OrderDraft = serde_json::from_str(
            r#"{
                "id": 999,
                "date": "1999-01-01T00:00:00.000",
                "total": 7.5,
                "items": [{"id": "p1", "name": "Pizza", "price": 7.5, "quantity": 1, "imageUrl": ""}],
                "customer": {"name": "Ana", "email": "ana@example.com", "phoneNumber": "555"}
            }"#,
        )
        .unwrap();

        assert_eq!(draft.total, 7.5);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.customer.phone_number, "555");
    }

    #[test]
    fn draft_tolerates_missing_customer() {
        let draft: OrderDraft = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(draft.customer, Customer::default());
        assert_eq!(draft.total, 0.0);
    }
}
