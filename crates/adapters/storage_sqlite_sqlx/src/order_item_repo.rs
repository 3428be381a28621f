//! `SQLite` implementation of [`OrderItemRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bistro_app::ports::OrderItemRepository;
use bistro_domain::error::BistroError;
use bistro_domain::id::{DishId, OrderId, OrderItemId};
use bistro_domain::order_item::{OrderItem, OrderItemFields};

use crate::error::StorageError;

struct Wrapper(OrderItem);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(OrderItem {
            id: OrderItemId::new(row.try_get("id")?),
            dish_id: DishId::new(row.try_get("dish_id")?),
            quantity: row.try_get("quantity")?,
            order_id: OrderId::new(row.try_get("order_id")?),
        }))
    }
}

const INSERT: &str = "INSERT INTO order_items (dish_id, quantity, order_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM order_items WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM order_items ORDER BY id";
const UPDATE: &str = "UPDATE order_items SET dish_id = ?, quantity = ?, order_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM order_items WHERE id = ?";

/// `SQLite`-backed order item repository.
pub struct SqliteOrderItemRepository {
    pool: SqlitePool,
}

impl SqliteOrderItemRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OrderItemRepository for SqliteOrderItemRepository {
    fn create(
        &self,
        fields: OrderItemFields,
    ) -> impl Future<Output = Result<OrderItem, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(fields.dish_id.get())
                .bind(fields.quantity)
                .bind(fields.order_id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(OrderItem::new(
                OrderItemId::new(result.last_insert_rowid()),
                fields,
            ))
        }
    }

    fn get_by_id(
        &self,
        id: OrderItemId,
    ) -> impl Future<Output = Result<Option<OrderItem>, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<OrderItem>, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        item: OrderItem,
    ) -> impl Future<Output = Result<OrderItem, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(item.dish_id.get())
                .bind(item.quantity)
                .bind(item.order_id.get())
                .bind(item.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(item)
        }
    }

    fn delete(&self, id: OrderItemId) -> impl Future<Output = Result<(), BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
