//! `SQLite` implementation of [`CustomerRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bistro_app::ports::CustomerRepository;
use bistro_domain::customer::{Customer, CustomerFields};
use bistro_domain::error::BistroError;
use bistro_domain::id::CustomerId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Customer`].
struct Wrapper(Customer);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Customer> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Customer {
            id: CustomerId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            phone: row.try_get("phone")?,
            spending: row.try_get("spending")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO customers (name, age, phone, spending) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM customers WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM customers ORDER BY id";
const UPDATE: &str = "UPDATE customers SET name = ?, age = ?, phone = ?, spending = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM customers WHERE id = ?";

/// `SQLite`-backed customer repository.
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for SqliteCustomerRepository {
    fn create(
        &self,
        fields: CustomerFields,
    ) -> impl Future<Output = Result<Customer, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&fields.name)
                .bind(fields.age)
                .bind(&fields.phone)
                .bind(&fields.spending)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Customer::new(
                CustomerId::new(result.last_insert_rowid()),
                fields,
            ))
        }
    }

    fn get_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Customer>, BistroError>> + Send {
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
        customer: Customer,
    ) -> impl Future<Output = Result<Customer, BistroError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&customer.name)
                .bind(customer.age)
                .bind(&customer.phone)
                .bind(&customer.spending)
                .bind(customer.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(customer)
        }
    }

    fn delete(&self, id: CustomerId) -> impl Future<Output = Result<(), BistroError>> + Send {
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
