//! Shared application state for all routes.

use crate::repository::SupplierRepository;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once in `main` and handed to every route; no ambient
    /// singletons anywhere.
    pub repo: SupplierRepository,
}
