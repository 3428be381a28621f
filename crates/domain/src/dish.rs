//! Dish: an item on the menu, optionally filed under a [`Category`].

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::id::{CategoryId, DishId};

/// A menu item.
///
/// `category` is the preloaded related row. It is `None` when the dish has
/// no category or when the relation was not loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price: String,
    pub category_id: Option<CategoryId>,
    pub category: Option<Category>,
}

/// The writable attributes of a [`Dish`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishFields {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub price: String,
    pub category_id: Option<CategoryId>,
}

impl Dish {
    /// Name used when reporting a missing dish.
    pub const KIND: &'static str = "dish";

    /// Assemble a dish without its related category.
    #[must_use]
    pub fn new(id: DishId, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            category_id: fields.category_id,
            category: None,
        }
    }

    /// Replace every writable attribute, keeping the id.
    ///
    /// The preloaded category is dropped when it no longer matches
    /// `category_id`.
    pub fn overwrite(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.price = fields.price;
        if self.category_id != fields.category_id {
            self.category = None;
        }
        self.category_id = fields.category_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryFields;

    fn starters() -> Category {
        Category::new(
            CategoryId::new(1),
            CategoryFields {
                name: "Starters".to_string(),
            },
        )
    }

    fn soup() -> Dish {
        let mut dish = Dish::new(
            DishId::new(10),
            DishFields {
                name: "Soup".to_string(),
                price: "4.50".to_string(),
                category_id: Some(CategoryId::new(1)),
            },
        );
        dish.category = Some(starters());
        dish
    }

    #[test]
    fn should_keep_category_when_category_id_unchanged() {
        let mut dish = soup();
        dish.overwrite(DishFields {
            name: "Tomato soup".to_string(),
            price: "5.00".to_string(),
            category_id: Some(CategoryId::new(1)),
        });
        assert_eq!(dish.name, "Tomato soup");
        assert_eq!(dish.price, "5.00");
        assert_eq!(dish.category, Some(starters()));
    }

    #[test]
    fn should_drop_stale_category_when_category_id_changes() {
        let mut dish = soup();
        dish.overwrite(DishFields {
            name: "Soup".to_string(),
            price: "4.50".to_string(),
            category_id: Some(CategoryId::new(2)),
        });
        assert_eq!(dish.category_id, Some(CategoryId::new(2)));
        assert!(dish.category.is_none());
    }

    #[test]
    fn should_serialize_nested_category() {
        let json = serde_json::to_value(soup()).unwrap();
        assert_eq!(json["category_id"], 1);
        assert_eq!(json["category"]["name"], "Starters");
    }

    #[test]
    fn should_ignore_nested_category_when_decoding_fields() {
        let parsed: DishFields = serde_json::from_str(
            r#"{"name":"Soup","price":"4.50","category_id":1,"category":{"id":1,"name":"x"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.category_id, Some(CategoryId::new(1)));
    }

    #[test]
    fn should_decode_null_category_id() {
        let parsed: DishFields = serde_json::from_str(r#"{"name":"Bread"}"#).unwrap();
        assert!(parsed.category_id.is_none());
    }
}
