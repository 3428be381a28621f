//! # bistro-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `bistro-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows, preloading relations
//!   with `LEFT JOIN`s
//!
//! ## Dependency rule
//! Depends on `bistro-app` (for port traits) and `bistro-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod bill_repo;
mod category_repo;
mod customer_repo;
mod dish_repo;
mod order_item_repo;

pub mod error;
pub mod pool;

pub use bill_repo::SqliteBillRepository;
pub use category_repo::SqliteCategoryRepository;
pub use customer_repo::SqliteCustomerRepository;
pub use dish_repo::SqliteDishRepository;
pub use error::StorageError;
pub use order_item_repo::SqliteOrderItemRepository;
pub use pool::{Config, Database};
