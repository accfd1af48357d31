// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::Error as SqlxError;
use tracing::instrument;

use crate::dtos::product::{
    CreateProductRequest, ListProductsQuery, ProductResponse, ProductWithSupplier,
    UpdateProductRequest,
};
use crate::error::AppError;
use crate::repo::{products, suppliers};
use crate::state::AppState;

fn map_fk_violation(err: SqlxError, message: &str) -> AppError {
    match err {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
            AppError::not_found(message)
        }
        other => other.into(),
    }
}

// POST /api/products - Create product under an existing supplier
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;

    if suppliers::get_by_id(&state.db_pool, payload.supplier_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Supplier not found"));
    }

    // FK violation backstop for a supplier deleted between check and insert.
    let product = products::create(&state.db_pool, &payload)
        .await
        .map_err(|e| map_fk_violation(e, "Supplier not found"))?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// GET /api/products - List products with their suppliers, filterable
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductWithSupplier>>, AppError> {
    let rows = products::list(
        &state.db_pool,
        query.skip,
        query.limit,
        query.category,
        query.certification_status,
    )
    .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(product, supplier)| ProductWithSupplier {
                product: product.into(),
                supplier: supplier.into(),
            })
            .collect(),
    ))
}

// PUT /api/products/:id - Partial update
#[instrument(skip(state, payload), fields(id))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;

    let product = products::update(&state.db_pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /api/products/:id - Delete product
#[instrument(skip(state), fields(id))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !products::delete(&state.db_pool, id).await? {
        return Err(AppError::not_found("Product not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
