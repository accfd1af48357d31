// src/handlers/supplier.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::Error as SqlxError;
use tracing::instrument;

use crate::dtos::supplier::{CreateSupplierRequest, SupplierResponse, SupplierWithProducts};
use crate::dtos::Pagination;
use crate::error::AppError;
use crate::repo::suppliers;
use crate::state::AppState;

fn map_unique_violation(err: SqlxError, message: &str) -> AppError {
    match err {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            AppError::conflict(message)
        }
        other => other.into(),
    }
}

// POST /api/suppliers - Create supplier
#[instrument(skip(state, payload))]
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<CreateSupplierRequest>,
) -> Result<(StatusCode, Json<SupplierResponse>), AppError> {
    payload.validate()?;

    // Fast-path check; the unique constraint is the authoritative guard
    // against two concurrent registrations of the same email.
    if suppliers::get_by_email(&state.db_pool, payload.email.trim())
        .await?
        .is_some()
    {
        return Err(AppError::conflict("Email already registered"));
    }

    let supplier = suppliers::create(&state.db_pool, &payload)
        .await
        .map_err(|e| map_unique_violation(e, "Email already registered"))?;

    Ok((StatusCode::CREATED, Json(SupplierResponse::from(supplier))))
}

// GET /api/suppliers - List suppliers
#[instrument(skip(state))]
pub async fn list_suppliers(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<SupplierResponse>>, AppError> {
    let rows = suppliers::list(&state.db_pool, pagination.skip, pagination.limit).await?;
    Ok(Json(rows.into_iter().map(SupplierResponse::from).collect()))
}

// GET /api/suppliers/:id - Supplier detail with its products
#[instrument(skip(state), fields(id))]
pub async fn get_supplier(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<SupplierWithProducts>, AppError> {
    let supplier = suppliers::get_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Supplier not found"))?;

    let products = suppliers::products_of(&state.db_pool, id).await?;

    Ok(Json(SupplierWithProducts {
        supplier: SupplierResponse::from(supplier),
        products: products.into_iter().map(Into::into).collect(),
    }))
}
