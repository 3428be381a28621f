//! Order item: a quantity of one dish within an order.

use serde::{Deserialize, Serialize};

use crate::id::{DishId, OrderId, OrderItemId};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub dish_id: DishId,
    pub quantity: i64,
    pub order_id: OrderId,
}

/// The writable attributes of an [`OrderItem`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItemFields {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub dish_id: DishId,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub order_id: OrderId,
}

impl OrderItem {
    /// Name used when reporting a missing order item.
    pub const KIND: &'static str = "order item";

    /// Assemble an order item from its store-assigned id and attributes.
    #[must_use]
    pub fn new(id: OrderItemId, fields: OrderItemFields) -> Self {
        Self {
            id,
            dish_id: fields.dish_id,
            quantity: fields.quantity,
            order_id: fields.order_id,
        }
    }

    /// Replace every writable attribute, keeping the id.
    pub fn overwrite(&mut self, fields: OrderItemFields) {
        self.dish_id = fields.dish_id;
        self.quantity = fields.quantity;
        self.order_id = fields.order_id;
    }
}
