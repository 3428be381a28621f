//! Bill: an amount charged to a [`Customer`].

use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::id::{BillId, CustomerId};

/// A bill issued to a customer.
///
/// `customer` is the preloaded related row, `None` when not loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub customer_id: CustomerId,
    pub customer: Option<Customer>,
    pub amount: f64,
}

/// The writable attributes of a [`Bill`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillFields {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub customer_id: CustomerId,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub amount: f64,
}

impl Bill {
    /// Name used when reporting a missing bill.
    pub const KIND: &'static str = "bill";

    /// Assemble a bill without its related customer.
    #[must_use]
    pub fn new(id: BillId, fields: BillFields) -> Self {
        Self {
            id,
            customer_id: fields.customer_id,
            customer: None,
            amount: fields.amount,
        }
    }

    /// Replace every writable attribute, keeping the id.
    ///
    /// The preloaded customer is dropped when it no longer matches
    /// `customer_id`.
    pub fn overwrite(&mut self, fields: BillFields) {
        if self.customer_id != fields.customer_id {
            self.customer = None;
        }
        self.customer_id = fields.customer_id;
        self.amount = fields.amount;
    }
}
