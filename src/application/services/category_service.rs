//! Catalogue category service.

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::{CategoryRepository, ProductRepository};
use crate::error::AppError;
use crate::utils::slugify;
use serde_json::json;
use std::sync::Arc;

/// Service for managing catalogue categories.
///
/// Slugs are always derived from the name; callers never set them directly.
/// A category that still has products cannot be deleted.
pub struct CategoryService<C: CategoryRepository, P: ProductRepository> {
    repository: Arc<C>,
    product_repository: Arc<P>,
}

impl<C: CategoryRepository, P: ProductRepository> CategoryService<C, P> {
    pub fn new(repository: Arc<C>, product_repository: Arc<P>) -> Self {
        Self {
            repository,
            product_repository,
        }
    }

    /// Creates a category, deriving its slug from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name or slug is already used.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_category(&self, name: String) -> Result<Category, AppError> {
        let new_category = self.prepare(&name, None).await?;

        let category = self.repository.create(new_category).await?;
        tracing::info!(category_id = category.id, slug = %category.slug, "Category created");
        Ok(category)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    pub async fn get_category(&self, id: i64) -> Result<Category, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found", json!({"id": id})))
    }

    /// Renames a category and recomputes its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Conflict`] if another category uses the name or slug.
    pub async fn update_category(&self, id: i64, name: String) -> Result<Category, AppError> {
        self.get_category(id).await?;
        let update = self.prepare(&name, Some(id)).await?;
        self.repository.update(id, update).await
    }

    /// Deletes an empty category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Conflict`] if products still belong to it.
    pub async fn delete_category(&self, id: i64) -> Result<(), AppError> {
        self.get_category(id).await?;

        if self.product_repository.exists_by_category_id(id).await? {
            return Err(AppError::conflict(
                "Category has products; delete or move products first",
                json!({"id": id}),
            ));
        }

        self.repository.delete(id).await
    }

    /// Trims the name, derives the slug and checks both are free.
    ///
    /// `current_id` is the category being renamed, which may keep its own
    /// name and slug.
    async fn prepare(&self, name: &str, current_id: Option<i64>) -> Result<NewCategory, AppError> {
        let name = name.trim().to_string();
        let slug = slugify(&name);

        let taken_by_other = |c: &Category| Some(c.id) != current_id;

        if let Some(existing) = self.repository.find_by_name_ignore_case(&name).await?
            && taken_by_other(&existing)
        {
            return Err(AppError::conflict(
                "Category already exists",
                json!({"name": name, "existing_id": existing.id}),
            ));
        }

        if let Some(existing) = self.repository.find_by_slug(&slug).await?
            && taken_by_other(&existing)
        {
            return Err(AppError::conflict(
                "Category slug already exists",
                json!({"slug": slug, "existing_id": existing.id}),
            ));
        }

        Ok(NewCategory { name, slug })
    }
}
