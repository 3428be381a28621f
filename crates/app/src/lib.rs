//! # bistro-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   one CRUD repository per entity (`CustomerRepository`, `CategoryRepository`,
//!   `DishRepository`, `OrderItemRepository`, `BillRepository`)
//! - Define **driving/inbound ports** as use-case structs, one service per
//!   resource: list, create, get, update (whitelisted overwrite), delete
//! - Turn "no such row" into a typed not-found error carrying the entity name
//!
//! ## Dependency rule
//! Depends on `bistro-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
