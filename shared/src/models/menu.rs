//! Menu Models

use serde::{Deserialize, Serialize};

/// A single menu item in its internal, source-independent shape.
///
/// Immutable once constructed; owned by exactly one [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// One menu category with its display name and items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display form, e.g. "Fried Chicken" (not the slug)
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_uses_camel_case_wire_names() {
        let item = MenuItem {
            id: "bbq-1".into(),
            name: "Smoked Ribs".into(),
            description: "Slow smoked".into(),
            price: 12.5,
            image_url: "https://example.com/ribs.jpg".into(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/ribs.jpg");
        assert!(json.get("image_url").is_none());
    }
}
