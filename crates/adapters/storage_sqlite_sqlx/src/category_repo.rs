//! `SQLite` implementation of [`CategoryRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bistro_app::ports::CategoryRepository;
use bistro_domain::category::{Category, CategoryFields};
use bistro_domain::error::BistroError;
use bistro_domain::id::CategoryId;

use crate::error::StorageError;

struct Wrapper(Category);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Category {
            id: CategoryId::new(row.try_get("id")?),
            name: row.try_get("name")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO categories (name) VALUES (?)";
const SELECT_BY_ID: &str = "SELECT * FROM categories WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM categories ORDER BY id";
const UPDATE: &str = "UPDATE categories SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM categories WHERE id = ?";

/// `SQLite`-backed category repository.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn create(
        &self,
        fields: CategoryFields,
    ) -> impl Future<Output = Result<Category, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&fields.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Category::new(
                CategoryId::new(result.last_insert_rowid()),
                fields,
            ))
        }
    }

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, BistroError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, BistroError>> + Send {
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
        category: Category,
    ) -> impl Future<Output = Result<Category, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&category.name)
                .bind(category.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(category)
        }
    }

    fn delete(&self, id: CategoryId) -> impl Future<Output = Result<(), BistroError>> + Send {
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
