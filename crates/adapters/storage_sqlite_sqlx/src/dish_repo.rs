//! `SQLite` implementation of [`DishRepository`].
//!
//! Every read joins `categories` so the returned dishes carry their
//! category.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bistro_app::ports::DishRepository;
use bistro_domain::category::Category;
use bistro_domain::dish::{Dish, DishFields};
use bistro_domain::error::{BistroError, NotFoundError};
use bistro_domain::id::{CategoryId, DishId};

use crate::error::StorageError;

/// Wrapper for converting joined rows into domain [`Dish`].
struct Wrapper(Dish);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let category_id: Option<i64> = row.try_get("category_id")?;
        let category_name: Option<String> = row.try_get("category_name")?;

        let category_id = category_id.map(CategoryId::new);
        let category = category_id
            .zip(category_name)
            .map(|(id, name)| Category { id, name });

        Ok(Self(Dish {
            id: DishId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            category_id,
            category,
        }))
    }
}

const INSERT: &str = "INSERT INTO dishes (name, price, category_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT d.id, d.name, d.price, d.category_id, c.name AS category_name \
     FROM dishes d LEFT JOIN categories c ON c.id = d.category_id \
     WHERE d.id = ?";
const SELECT_ALL: &str = "SELECT d.id, d.name, d.price, d.category_id, c.name AS category_name \
     FROM dishes d LEFT JOIN categories c ON c.id = d.category_id \
     ORDER BY d.id";
const UPDATE: &str = "UPDATE dishes SET name = ?, price = ?, category_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM dishes WHERE id = ?";

async fn fetch_by_id(pool: &SqlitePool, id: DishId) -> Result<Option<Dish>, StorageError> {
    let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
        .bind(id.get())
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|w| w.0))
}

async fn reload(pool: &SqlitePool, id: DishId) -> Result<Dish, BistroError> {
    fetch_by_id(pool, id).await?.ok_or_else(|| {
        NotFoundError {
            entity: Dish::KIND,
            id: id.to_string(),
        }
        .into()
    })
}

/// `SQLite`-backed dish repository.
pub struct SqliteDishRepository {
    pool: SqlitePool,
}

impl SqliteDishRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DishRepository for SqliteDishRepository {
    fn create(&self, fields: DishFields) -> impl Future<Output = Result<Dish, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&fields.name)
                .bind(&fields.price)
                .bind(fields.category_id.map(CategoryId::get))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            reload(&pool, DishId::new(result.last_insert_rowid())).await
        }
    }

    fn get_by_id(
        &self,
        id: DishId,
    ) -> impl Future<Output = Result<Option<Dish>, BistroError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(fetch_by_id(&pool, id).await?) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Dish>, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, dish: Dish) -> impl Future<Output = Result<Dish, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&dish.name)
                .bind(&dish.price)
                .bind(dish.category_id.map(CategoryId::get))
                .bind(dish.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            reload(&pool, dish.id).await
        }
    }

    fn delete(&self, id: DishId) -> impl Future<Output = Result<(), BistroError>> + Send {
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
