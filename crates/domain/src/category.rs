//! Category: a section of the menu that dishes are filed under.

use serde::{Deserialize, Serialize};

use crate::id::CategoryId;

/// A menu category such as "Starters" or "Desserts".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// The writable attributes of a [`Category`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFields {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
}

impl Category {
    /// Name used when reporting a missing category.
    pub const KIND: &'static str = "category";

    /// Assemble a category from its store-assigned id and name.
    #[must_use]
    pub fn new(id: CategoryId, fields: CategoryFields) -> Self {
        Self {
            id,
            name: fields.name,
        }
    }

    /// Replace every writable attribute, keeping the id.
    pub fn overwrite(&mut self, fields: CategoryFields) {
        self.name = fields.name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_overwrite_name() {
        let mut category = Category::new(
            CategoryId::new(1),
            CategoryFields {
                name: "Starters".to_string(),
            },
        );
        category.overwrite(CategoryFields {
            name: "Mains".to_string(),
        });
        assert_eq!(category.id, CategoryId::new(1));
        assert_eq!(category.name, "Mains");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let category = Category::new(
            CategoryId::new(2),
            CategoryFields {
                name: "Desserts".to_string(),
            },
        );
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, r#"{"id":2,"name":"Desserts"}"#);
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, category);
    }
}
