//! Product catalogue service.

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::repositories::{CategoryRepository, ProductRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for products, their SKUs and stock levels.
///
/// SKUs are unique after trimming. Every product belongs to an existing
/// category.
pub struct ProductService<P: ProductRepository, C: CategoryRepository> {
    repository: Arc<P>,
    category_repository: Arc<C>,
}

impl<P: ProductRepository, C: CategoryRepository> ProductService<P, C> {
    pub fn new(repository: Arc<P>, category_repository: Arc<C>) -> Self {
        Self {
            repository,
            category_repository,
        }
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if price is not positive or stock is negative.
    /// Returns [`AppError::Conflict`] if the SKU is taken.
    /// Returns [`AppError::NotFound`] if the category does not exist.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let new_product = NewProduct {
            name: new_product.name.trim().to_string(),
            sku: new_product.sku.trim().to_string(),
            ..new_product
        };

        Self::check_price_and_stock(Some(new_product.price.cents()), Some(new_product.stock))?;

        if self.repository.exists_by_sku(&new_product.sku).await? {
            return Err(AppError::conflict(
                "SKU already exists",
                json!({"sku": new_product.sku}),
            ));
        }

        self.ensure_category(new_product.category_id).await?;

        let product = self.repository.create(new_product).await?;
        tracing::info!(product_id = product.id, sku = %product.sku, "Product created");
        Ok(product)
    }

    /// Lists products, optionally only those in `category_id`.
    pub async fn list_products(&self, category_id: Option<i64>) -> Result<Vec<Product>, AppError> {
        self.repository.list(category_id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({"id": id})))
    }

    /// Applies a partial update. Fields left as `None` are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product or new category does not exist.
    /// Returns [`AppError::Conflict`] if the new SKU belongs to another product.
    /// Returns [`AppError::Validation`] if price or stock are out of range.
    pub async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError> {
        let existing = self.get_product(id).await?;

        let patch = ProductPatch {
            name: patch.name.map(|n| n.trim().to_string()),
            sku: patch.sku.map(|s| s.trim().to_string()),
            ..patch
        };

        Self::check_price_and_stock(patch.price.map(|p| p.cents()), patch.stock)?;

        if let Some(sku) = &patch.sku
            && *sku != existing.sku
            && self.repository.exists_by_sku(sku).await?
        {
            return Err(AppError::conflict("SKU already exists", json!({"sku": sku})));
        }

        if let Some(category_id) = patch.category_id {
            self.ensure_category(category_id).await?;
        }

        if patch.is_empty() {
            return Ok(existing);
        }

        self.repository.update(id, patch).await
    }

    /// Deletes a product that no order or review references.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Conflict`] if order items or reviews reference it.
    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    async fn ensure_category(&self, category_id: i64) -> Result<(), AppError> {
        match self.category_repository.find_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(
                "Category not found",
                json!({"category_id": category_id}),
            )),
        }
    }

    fn check_price_and_stock(price_cents: Option<i64>, stock: Option<i32>) -> Result<(), AppError> {
        if let Some(cents) = price_cents
            && cents <= 0
        {
            return Err(AppError::bad_request(
                "Price must be > 0",
                json!({"field": "price"}),
            ));
        }
        if let Some(stock) = stock
            && stock < 0
        {
            return Err(AppError::bad_request(
                "Stock must be >= 0",
                json!({"field": "stock", "value": stock}),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Category, Money};
    use crate::domain::repositories::{MockCategoryRepository, MockProductRepository};
    use chrono::Utc;

    fn create_test_product(id: i64, sku: &str) -> Product {
        Product {
            id,
            name: "Laptop".to_string(),
            sku: sku.to_string(),
            price: Money::from_cents(1_000_000),
            stock: 5,
            category_id: 1,
            category_name: "Electronics".to_string(),
            created_at: Utc::now(),
        }
    }

    fn new_product(sku: &str) -> NewProduct {
        NewProduct {
            name: " Laptop ".to_string(),
            sku: sku.to_string(),
            price: Money::from_cents(1_000_000),
            stock: 5,
            category_id: 1,
        }
    }

    fn category_repo_with(found: bool) -> MockCategoryRepository {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(found.then(|| {
                Category::new(id, "Electronics".to_string(), "electronics".to_string(), Utc::now())
            }))
        });
        repo
    }

    #[tokio::test]
    async fn test_create_product_success() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_exists_by_sku()
            .withf(|sku| sku == "SKU-1")
            .times(1)
            .returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .withf(|p| p.name == "Laptop" && p.sku == "SKU-1")
            .times(1)
            .returning(|p| Ok(create_test_product(10, &p.sku)));

        let service = ProductService::new(Arc::new(mock_repo), Arc::new(category_repo_with(true)));

        let product = service.create_product(new_product("  SKU-1 ")).await.unwrap();

        assert_eq!(product.id, 10);
        assert_eq!(product.sku, "SKU-1");
    }

    #[tokio::test]
    async fn test_create_product_duplicate_sku() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_exists_by_sku().returning(|_| Ok(true));
        mock_repo.expect_create().never();

        let service = ProductService::new(Arc::new(mock_repo), Arc::new(category_repo_with(true)));

        let result = service.create_product(new_product("SKU-1")).await;

        match result.unwrap_err() {
            AppError::Conflict { message, .. } => assert_eq!(message, "SKU already exists"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_product_unknown_category() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_exists_by_sku().returning(|_| Ok(false));
        mock_repo.expect_create().never();

        let service = ProductService::new(Arc::new(mock_repo), Arc::new(category_repo_with(false)));

        let result = service.create_product(new_product("SKU-1")).await;

        match result.unwrap_err() {
            AppError::NotFound { message, .. } => assert_eq!(message, "Category not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_product_rejects_non_positive_price() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(Arc::new(mock_repo), Arc::new(category_repo_with(true)));

        let mut input = new_product("SKU-1");
        input.price = Money::ZERO;

        let result = service.create_product(input).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_product_same_sku_is_not_a_conflict() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_product(id, "SKU-1"))));
        mock_repo.expect_exists_by_sku().never();
        mock_repo.expect_update().times(1).returning(|id, patch| {
            let mut p = create_test_product(id, "SKU-1");
            p.stock = patch.stock.unwrap_or(p.stock);
            Ok(p)
        });

        let service = ProductService::new(Arc::new(mock_repo), Arc::new(category_repo_with(true)));

        let patch = ProductPatch {
            sku: Some(" SKU-1 ".to_string()),
            stock: Some(0),
            ..Default::default()
        };
        let product = service.update_product(3, patch).await.unwrap();

        assert_eq!(product.stock, 0);
    }

    #[tokio::test]
    async fn test_update_product_sku_taken() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_product(id, "SKU-1"))));
        mock_repo
            .expect_exists_by_sku()
            .withf(|sku| sku == "SKU-2")
            .returning(|_| Ok(true));
        mock_repo.expect_update().never();

        let service = ProductService::new(Arc::new(mock_repo), Arc::new(category_repo_with(true)));

        let patch = ProductPatch {
            sku: Some("SKU-2".to_string()),
            ..Default::default()
        };
        let result = service.update_product(3, patch).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_product_empty_patch_returns_current() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_product(id, "SKU-1"))));
        mock_repo.expect_update().never();

        let service = ProductService::new(Arc::new(mock_repo), Arc::new(category_repo_with(true)));

        let product = service
            .update_product(3, ProductPatch::default())
            .await
            .unwrap();

        assert_eq!(product.id, 3);
    }
}
