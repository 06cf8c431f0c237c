//! Supplier resource routes.

use crate::handlers::supplier::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// CRUD routes for the supplier resource, JSON in and out.
pub fn supplier_routes(state: AppState) -> Router {
    Router::new()
        .route("/supplier", get(list).post(create))
        .route(
            "/supplier/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
