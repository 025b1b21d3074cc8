//! Handlers for product endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use super::{Created, created, required};
use crate::api::dto::product::{
    CreateProductRequest, PatchProductRequest, ProductListQuery, ProductResponse,
};
use crate::api::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

fn product_to_response(p: Product) -> ProductResponse {
    ProductResponse {
        id: p.id,
        name: p.name,
        sku: p.sku,
        price: p.price,
        stock: p.stock,
        category_id: p.category_id,
        category_name: p.category_name,
        created_at: p.created_at,
    }
}

/// Creates a product in an existing category.
///
/// `stock` defaults to 0 when omitted.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 409, description = "SKU already exists", body = ErrorBody),
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> Result<Created<ProductResponse>, AppError> {
    let new_product = NewProduct {
        name: payload.name,
        sku: payload.sku,
        price: required(payload.price, "price")?,
        stock: payload.stock.unwrap_or(0),
        category_id: required(payload.category_id, "category_id")?,
    };

    let product = state.product_service.create_product(new_product).await?;

    Ok(created(
        format!("/api/products/{}", product.id),
        product_to_response(product),
    ))
}

/// Lists products, optionally filtered by `categoryId`.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(ProductListQuery),
    responses((status = 200, description = "Products ordered by id", body = [ProductResponse]))
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductListQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state
        .product_service
        .list_products(query.category_id)
        .await?;

    Ok(Json(products.into_iter().map(product_to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorBody),
    )
)]
pub async fn get_product_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product_to_response(product)))
}

/// Partially updates a product. Absent or null fields are left unchanged.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = PatchProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Product or category not found", body = ErrorBody),
        (status = 409, description = "SKU already exists", body = ErrorBody),
    )
)]
pub async fn patch_product_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PatchProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let patch = ProductPatch {
        name: payload.name,
        sku: payload.sku,
        price: payload.price,
        stock: payload.stock,
        category_id: payload.category_id,
    };

    let product = state.product_service.update_product(id, patch).await?;

    Ok(Json(product_to_response(product)))
}

/// Deletes a product no order or review references.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 409, description = "Product is referenced", body = ErrorBody),
    )
)]
pub async fn delete_product_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
