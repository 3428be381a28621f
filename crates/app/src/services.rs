//! Application services: use-case implementations.
//!
//! Each service struct accepts a port trait implementation via a generic
//! parameter (constructor injection), keeping this layer decoupled from
//! concrete adapters.

pub mod bill_service;
pub mod category_service;
pub mod customer_service;
pub mod dish_service;
pub mod order_item_service;
