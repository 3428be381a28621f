//! Order item service: use-cases for managing order lines.

use bistro_domain::error::{BistroError, NotFoundError};
use bistro_domain::id::OrderItemId;
use bistro_domain::order_item::{OrderItem, OrderItemFields};

use crate::ports::OrderItemRepository;

/// Application service for order item CRUD operations.
pub struct OrderItemService<R> {
    repo: R,
}

impl<R: OrderItemRepository> OrderItemService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all order items.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_order_items(&self) -> Result<Vec<OrderItem>, BistroError> {
        self.repo.get_all().await
    }

    /// Persist a new order item and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_order_item(
        &self,
        fields: OrderItemFields,
    ) -> Result<OrderItem, BistroError> {
        self.repo.create(fields).await
    }

    /// Look up an order item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no order item with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_order_item(&self, id: OrderItemId) -> Result<OrderItem, BistroError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: OrderItem::KIND,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Overwrite dish, quantity and order of an existing order item.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no order item with `id`
    /// exists, or a storage error from the repository.
    pub async fn update_order_item(
        &self,
        id: OrderItemId,
        fields: OrderItemFields,
    ) -> Result<OrderItem, BistroError> {
        let mut item = self.get_order_item(id).await?;
        item.overwrite(fields);
        self.repo.update(item).await
    }

    /// Delete an existing order item.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no order item with `id`
    /// exists, or a storage error from the repository.
    pub async fn delete_order_item(&self, id: OrderItemId) -> Result<(), BistroError> {
        let item = self.get_order_item(id).await?;
        self.repo.delete(item.id).await?;
        tracing::debug!(%id, "order item deleted");
        Ok(())
    }
}
