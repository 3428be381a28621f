//! Bill service: use-cases for managing bills.

use bistro_domain::bill::{Bill, BillFields};
use bistro_domain::error::{BistroError, NotFoundError};
use bistro_domain::id::BillId;

use crate::ports::BillRepository;

/// Application service for bill CRUD operations.
pub struct BillService<R> {
    repo: R,
}

impl<R: BillRepository> BillService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all bills with their customers.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_bills(&self) -> Result<Vec<Bill>, BistroError> {
        self.repo.get_all().await
    }

    /// Persist a new bill and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_bill(&self, fields: BillFields) -> Result<Bill, BistroError> {
        self.repo.create(fields).await
    }

    /// Look up a bill by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no bill with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_bill(&self, id: BillId) -> Result<Bill, BistroError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: Bill::KIND,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Overwrite customer and amount of an existing bill.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no bill with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_bill(&self, id: BillId, fields: BillFields) -> Result<Bill, BistroError> {
        let mut bill = self.get_bill(id).await?;
        bill.overwrite(fields);
        self.repo.update(bill).await
    }

    /// Delete an existing bill.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no bill with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_bill(&self, id: BillId) -> Result<(), BistroError> {
        let bill = self.get_bill(id).await?;
        self.repo.delete(bill.id).await?;
        tracing::debug!(%id, "bill deleted");
        Ok(())
    }
}
