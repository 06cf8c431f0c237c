//! Route tables and full application router assembly.

mod common;
mod supplier;

pub use common::common_routes;
pub use supplier::supplier_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this are rejected before the handler runs.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full application router: operational routes plus the supplier resource,
/// with a body size cap and request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(supplier_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
