//! Customer service: use-cases for managing customers.

use bistro_domain::customer::{Customer, CustomerFields};
use bistro_domain::error::{BistroError, NotFoundError};
use bistro_domain::id::CustomerId;

use crate::ports::CustomerRepository;

/// Application service for customer CRUD operations.
pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all customers. An empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, BistroError> {
        self.repo.get_all().await
    }

    /// Persist a new customer and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_customer(&self, fields: CustomerFields) -> Result<Customer, BistroError> {
        let customer = self.repo.create(fields).await?;
        tracing::debug!(id = %customer.id, "customer created");
        Ok(customer)
    }

    /// Look up a customer by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no customer with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, BistroError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: Customer::KIND,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Overwrite the writable attributes of an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no customer with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Customer, BistroError> {
        let mut customer = self.get_customer(id).await?;
        customer.overwrite(fields);
        self.repo.update(customer).await
    }

    /// Delete an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no customer with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), BistroError> {
        let customer = self.get_customer(id).await?;
        self.repo.delete(customer.id).await?;
        tracing::debug!(%id, "customer deleted");
        Ok(())
    }
}
