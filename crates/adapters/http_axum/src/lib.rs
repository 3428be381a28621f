//! # bistro-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON CRUD API**, one resource per entity
//!   (`/customers`, `/categories`, `/dishes`, `/order_items`, `/bills`)
//! - Decode request bodies leniently: any content type, unknown fields
//!   ignored, missing fields zeroed
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `bistro-app` (for port traits and services) and `bistro-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
