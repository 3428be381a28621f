//! `SQLite` implementation of [`BillRepository`].
//!
//! Every read joins `customers` so the returned bills carry their customer.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bistro_app::ports::BillRepository;
use bistro_domain::bill::{Bill, BillFields};
use bistro_domain::customer::Customer;
use bistro_domain::error::{BistroError, NotFoundError};
use bistro_domain::id::{BillId, CustomerId};

use crate::error::StorageError;

/// Wrapper for converting joined rows into domain [`Bill`].
struct Wrapper(Bill);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let customer_id = CustomerId::new(row.try_get("customer_id")?);

        // LEFT JOIN: the customer columns are all NULL when the row is missing.
        let customer_name: Option<String> = row.try_get("customer_name")?;
        let customer = match customer_name {
            Some(name) => Some(Customer {
                id: customer_id,
                name,
                age: row.try_get("customer_age")?,
                phone: row.try_get("customer_phone")?,
                spending: row.try_get("customer_spending")?,
            }),
            None => None,
        };

        Ok(Self(Bill {
            id: BillId::new(row.try_get("id")?),
            customer_id,
            customer,
            amount: row.try_get("amount")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO bills (customer_id, amount) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT b.id, b.customer_id, b.amount, \
     c.name AS customer_name, c.age AS customer_age, \
     c.phone AS customer_phone, c.spending AS customer_spending \
     FROM bills b LEFT JOIN customers c ON c.id = b.customer_id \
     WHERE b.id = ?";
const SELECT_ALL: &str = "SELECT b.id, b.customer_id, b.amount, \
     c.name AS customer_name, c.age AS customer_age, \
     c.phone AS customer_phone, c.spending AS customer_spending \
     FROM bills b LEFT JOIN customers c ON c.id = b.customer_id \
     ORDER BY b.id";
const UPDATE: &str = "UPDATE bills SET customer_id = ?, amount = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM bills WHERE id = ?";

async fn fetch_by_id(pool: &SqlitePool, id: BillId) -> Result<Option<Bill>, StorageError> {
    let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
        .bind(id.get())
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|w| w.0))
}

async fn reload(pool: &SqlitePool, id: BillId) -> Result<Bill, BistroError> {
    fetch_by_id(pool, id).await?.ok_or_else(|| {
        NotFoundError {
            entity: Bill::KIND,
            id: id.to_string(),
        }
        .into()
    })
}

/// `SQLite`-backed bill repository.
pub struct SqliteBillRepository {
    pool: SqlitePool,
}

impl SqliteBillRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BillRepository for SqliteBillRepository {
    fn create(&self, fields: BillFields) -> impl Future<Output = Result<Bill, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(fields.customer_id.get())
                .bind(fields.amount)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            reload(&pool, BillId::new(result.last_insert_rowid())).await
        }
    }

    fn get_by_id(
        &self,
        id: BillId,
    ) -> impl Future<Output = Result<Option<Bill>, BistroError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(fetch_by_id(&pool, id).await?) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Bill>, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, bill: Bill) -> impl Future<Output = Result<Bill, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(bill.customer_id.get())
                .bind(bill.amount)
                .bind(bill.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            reload(&pool, bill.id).await
        }
    }

    fn delete(&self, id: BillId) -> impl Future<Output = Result<(), BistroError>> + Send {
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
