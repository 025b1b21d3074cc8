//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{
    CategoryService, OrderService, ProductService, ReviewService, UserService,
};
use crate::infrastructure::persistence::{
    SqliteCategoryRepository, SqliteOrderRepository, SqliteProductRepository,
    SqliteReviewRepository, SqliteUserRepository,
};

pub type AppUserService = UserService<SqliteUserRepository>;
pub type AppCategoryService = CategoryService<SqliteCategoryRepository, SqliteProductRepository>;
pub type AppProductService = ProductService<SqliteProductRepository, SqliteCategoryRepository>;
pub type AppOrderService =
    OrderService<SqliteOrderRepository, SqliteUserRepository, SqliteProductRepository>;
pub type AppReviewService =
    ReviewService<SqliteReviewRepository, SqliteUserRepository, SqliteProductRepository>;

/// Services wired to their SQLite repositories.
///
/// Cheap to clone: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub user_service: Arc<AppUserService>,
    pub category_service: Arc<AppCategoryService>,
    pub product_service: Arc<AppProductService>,
    pub order_service: Arc<AppOrderService>,
    pub review_service: Arc<AppReviewService>,
}

impl AppState {
    /// Builds repositories and services on top of `pool`.
    ///
    /// The pool must already be migrated.
    pub fn new(pool: SqlitePool) -> Self {
        let pool_arc = Arc::new(pool.clone());

        let user_repository = Arc::new(SqliteUserRepository::new(pool_arc.clone()));
        let category_repository = Arc::new(SqliteCategoryRepository::new(pool_arc.clone()));
        let product_repository = Arc::new(SqliteProductRepository::new(pool_arc.clone()));
        let order_repository = Arc::new(SqliteOrderRepository::new(pool_arc.clone()));
        let review_repository = Arc::new(SqliteReviewRepository::new(pool_arc));

        Self {
            db: pool,
            user_service: Arc::new(UserService::new(user_repository.clone())),
            category_service: Arc::new(CategoryService::new(
                category_repository.clone(),
                product_repository.clone(),
            )),
            product_service: Arc::new(ProductService::new(
                product_repository.clone(),
                category_repository,
            )),
            order_service: Arc::new(OrderService::new(
                order_repository,
                user_repository.clone(),
                product_repository.clone(),
            )),
            review_service: Arc::new(ReviewService::new(
                review_repository,
                user_repository,
                product_repository,
            )),
        }
    }
}
