//! Supplier CRUD handlers: list, read, create, update, delete.
//!
//! Validation runs before any write; each write handler opens one
//! transaction and commits on success, so any failure on the way out rolls
//! the request's writes back.

use crate::error::AppError;
use crate::model::{Supplier, SupplierDraft};
use crate::repository::SupplierSort;
use crate::state::AppState;
use crate::validation;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("supplier with id {} does not exist", id))
}

/// GET /supplier — every supplier, ordered by name ascending.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Supplier>>, AppError> {
    let rows = state.repo.list_all(SupplierSort::Name).await?;
    Ok(Json(rows))
}

/// GET /supplier/{id}
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Supplier>, AppError> {
    let supplier = state.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(supplier))
}

/// POST /supplier — inserts with today's date. The body cannot set the id or
/// the create date.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<SupplierDraft>,
) -> Result<(StatusCode, Json<Supplier>), AppError> {
    validation::validate_create(&draft)?;
    let today = chrono::Local::now().date_naive();
    let mut tx = state.repo.begin().await?;
    let created = state.repo.persist(&mut tx, &draft, today).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /supplier/{id} — full replace: every mutable field is assigned from
/// the body, so omitted fields overwrite with null. The create date is kept.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<SupplierDraft>,
) -> Result<Json<Supplier>, AppError> {
    validation::validate_update(&draft)?;
    let mut tx = state.repo.begin().await?;
    let updated = state
        .repo
        .update(&mut tx, id, &draft)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;
    Ok(Json(updated))
}

/// DELETE /supplier/{id} — hard delete, 204 on success.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut tx = state.repo.begin().await?;
    if !state.repo.delete(&mut tx, id).await? {
        return Err(not_found(id));
    }
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
