mod common;

use mini_commerce::domain::entities::NewCategory;
use mini_commerce::domain::repositories::CategoryRepository;
use mini_commerce::error::AppError;
use mini_commerce::infrastructure::persistence::SqliteCategoryRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

#[sqlx::test]
async fn test_find_by_name_ignore_case(pool: SqlitePool) {
    common::create_test_category(&pool, "Garden", "garden").await;
    let repo = SqliteCategoryRepository::new(Arc::new(pool));

    let found = repo.find_by_name_ignore_case("gARDEN").await.unwrap();
    assert_eq!(found.unwrap().slug, "garden");

    assert!(repo.find_by_name_ignore_case("Kitchen").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_slug(pool: SqlitePool) {
    let id = common::create_test_category(&pool, "Home Office", "home-office").await;
    let repo = SqliteCategoryRepository::new(Arc::new(pool));

    let found = repo.find_by_slug("home-office").await.unwrap().unwrap();
    assert_eq!(found.id, id);
}

#[sqlx::test]
async fn test_update_category(pool: SqlitePool) {
    let id = common::create_test_category(&pool, "Old", "old").await;
    let repo = SqliteCategoryRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            id,
            NewCategory {
                name: "New".to_string(),
                slug: "new".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.slug, "new");
}

#[sqlx::test]
async fn test_delete_category_with_products_is_conflict(pool: SqlitePool) {
    let id = common::create_test_category(&pool, "Used", "used").await;
    common::create_test_product(&pool, "U-1", 100, 1, id).await;
    let repo = SqliteCategoryRepository::new(Arc::new(pool));

    assert!(matches!(repo.delete(id).await, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_list_categories_ordered(pool: SqlitePool) {
    common::create_test_category(&pool, "B", "b").await;
    common::create_test_category(&pool, "A", "a").await;
    let repo = SqliteCategoryRepository::new(Arc::new(pool));

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}
