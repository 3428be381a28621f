//! Category service: use-cases for managing menu categories.

use bistro_domain::category::{Category, CategoryFields};
use bistro_domain::error::{BistroError, NotFoundError};
use bistro_domain::id::CategoryId;

use crate::ports::CategoryRepository;

/// Application service for category CRUD operations.
pub struct CategoryService<R> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_categories(&self) -> Result<Vec<Category>, BistroError> {
        self.repo.get_all().await
    }

    /// Persist a new category and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_category(&self, fields: CategoryFields) -> Result<Category, BistroError> {
        self.repo.create(fields).await
    }

    /// Look up a category by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no category with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, BistroError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: Category::KIND,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Overwrite the name of an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no category with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_category(
        &self,
        id: CategoryId,
        fields: CategoryFields,
    ) -> Result<Category, BistroError> {
        let mut category = self.get_category(id).await?;
        category.overwrite(fields);
        self.repo.update(category).await
    }

    /// Delete an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`BistroError::NotFound`] when no category with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), BistroError> {
        let category = self.get_category(id).await?;
        self.repo.delete(category.id).await?;
        tracing::debug!(%id, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryCategoryRepo {
        store: Mutex<BTreeMap<CategoryId, Category>>,
    }

    impl CategoryRepository for InMemoryCategoryRepo {
        fn create(
            &self,
            fields: CategoryFields,
        ) -> impl Future<Output = Result<Category, BistroError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().last().map_or(1, |id| id.get() + 1);
            let category = Category::new(CategoryId::new(next), fields);
            store.insert(category.id, category.clone());
            async { Ok(category) }
        }

        fn get_by_id(
            &self,
            id: CategoryId,
        ) -> impl Future<Output = Result<Option<Category>, BistroError>> + Send {
            let result = self.store.lock().unwrap().get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, BistroError>> + Send {
            let result: Vec<Category> = self.store.lock().unwrap().values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            category: Category,
        ) -> impl Future<Output = Result<Category, BistroError>> + Send {
            self.store
                .lock()
                .unwrap()
                .insert(category.id, category.clone());
            async { Ok(category) }
        }

        fn delete(&self, id: CategoryId) -> impl Future<Output = Result<(), BistroError>> + Send {
            self.store.lock().unwrap().remove(&id);
            async { Ok(()) }
        }
    }

    fn named(name: &str) -> CategoryFields {
        CategoryFields {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn should_assign_increasing_ids_on_create() {
        let svc = CategoryService::new(InMemoryCategoryRepo::default());
        let first = svc.create_category(named("Starters")).await.unwrap();
        let second = svc.create_category(named("Mains")).await.unwrap();
        assert!(second.id > first.id);
        assert_eq!(svc.list_categories().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_rename_category_on_update() {
        let svc = CategoryService::new(InMemoryCategoryRepo::default());
        let created = svc.create_category(named("Starters")).await.unwrap();

        let updated = svc
            .update_category(created.id, named("Appetizers"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Appetizers");
    }

    #[tokio::test]
    async fn should_report_category_kind_when_missing() {
        let svc = CategoryService::new(InMemoryCategoryRepo::default());
        let result = svc.delete_category(CategoryId::new(5)).await;
        assert!(matches!(
            result,
            Err(BistroError::NotFound(NotFoundError { entity: "category", .. }))
        ));
    }
}
