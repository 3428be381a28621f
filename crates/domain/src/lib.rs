//! # bistro-domain
//!
//! Pure domain model for the bistro restaurant-ordering service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Customers** (who eats and pays)
//! - Define **Categories** and the **Dishes** filed under them
//! - Define **Order items** (a quantity of a dish within an order)
//! - Define **Bills** (an amount charged to a customer)
//! - Define the writable field set of each entity, used for both creation and
//!   whole-field overwrite on update
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod serde_helpers;

pub mod bill;
pub mod category;
pub mod customer;
pub mod dish;
pub mod order_item;
