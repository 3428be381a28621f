//! Dish service: use-cases for managing the menu.

use bistro_domain::dish::{Dish, DishFields};
use bistro_domain::error::{BistroError, NotFoundError};
use bistro_domain::id::DishId;

use crate::ports::DishRepository;

/// Application service for dish CRUD operations.
pub struct DishService<R> {
    repo: R,
}

impl<R: DishRepository> DishService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all dishes with their categories.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, BistroError> {
        self.repo.get_all().await
    }

    /// Persist a new dish and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository, including
    /// when `category_id` names no existing category.
    pub async fn create_dish(&self, fields: DishFields) -> Result<Dish, BistroError> {
        self.repo.create(fields).await
    }

    /// Look up a dish by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no dish with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_dish(&self, id: DishId) -> Result<Dish, BistroError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: Dish::KIND,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Overwrite name, price and category of an existing dish.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no dish with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_dish(&self, id: DishId, fields: DishFields) -> Result<Dish, BistroError> {
        let mut dish = self.get_dish(id).await?;
        dish.overwrite(fields);
        self.repo.update(dish).await
    }

    /// Delete an existing dish.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no dish with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_dish(&self, id: DishId) -> Result<(), BistroError> {
        let dish = self.get_dish(id).await?;
        self.repo.delete(dish.id).await?;
        tracing::debug!(%id, "dish deleted");
        Ok(())
    }
}
