//! Customer: a person who orders and is billed.

use serde::{Deserialize, Serialize};

use crate::id::CustomerId;

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub age: i64,
    pub phone: String,
    pub spending: String,
}

/// The writable attributes of a [`Customer`].
///
/// Missing fields decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerFields {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub age: i64,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub spending: String,
}

impl Customer {
    /// Name used when reporting a missing customer.
    pub const KIND: &'static str = "customer";

    /// Assemble a customer from its store-assigned id and attributes.
    #[must_use]
    pub fn new(id: CustomerId, fields: CustomerFields) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            phone: fields.phone,
            spending: fields.spending,
        }
    }

    /// Replace every writable attribute, keeping the id.
    pub fn overwrite(&mut self, fields: CustomerFields) {
        self.name = fields.name;
        self.age = fields.age;
        self.phone = fields.phone;
        self.spending = fields.spending;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> CustomerFields {
        CustomerFields {
            name: "Ada".to_string(),
            age: 36,
            phone: "555-0101".to_string(),
            spending: "120.50".to_string(),
        }
    }

    #[test]
    fn should_overwrite_all_writable_fields_and_keep_id() {
        let mut customer = Customer::new(CustomerId::new(4), fields());
        customer.overwrite(CustomerFields {
            name: "Grace".to_string(),
            age: 45,
            phone: "555-0199".to_string(),
            spending: "0".to_string(),
        });

        assert_eq!(customer.id, CustomerId::new(4));
        assert_eq!(customer.name, "Grace");
        assert_eq!(customer.age, 45);
        assert_eq!(customer.phone, "555-0199");
        assert_eq!(customer.spending, "0");
    }

    #[test]
    fn should_default_missing_fields_when_decoding() {
        let parsed: CustomerFields = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(parsed.name, "Ada");
        assert_eq!(parsed.age, 0);
        assert!(parsed.phone.is_empty());
    }

    #[test]
    fn should_ignore_id_when_decoding_fields() {
        let parsed: CustomerFields = serde_json::from_str(r#"{"id":99,"name":"Ada"}"#).unwrap();
        assert_eq!(parsed.name, "Ada");
    }

    #[test]
    fn should_reject_wrongly_typed_field() {
        let result: Result<CustomerFields, _> = serde_json::from_str(r#"{"age":"old"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_decode_null_fields_as_zero_values() {
        let parsed: CustomerFields =
            serde_json::from_str(r#"{"name":null,"age":null,"phone":"555","spending":null}"#)
                .unwrap();
        assert!(parsed.name.is_empty());
        assert_eq!(parsed.age, 0);
        assert_eq!(parsed.phone, "555");
        assert!(parsed.spending.is_empty());
    }

    #[test]
    fn should_accept_age_beyond_32_bits() {
        let parsed: CustomerFields = serde_json::from_str(r#"{"age":3000000000}"#).unwrap();
        assert_eq!(parsed.age, 3_000_000_000);
    }
}
