//! Shared state for the API router.

use std::sync::Arc;

use crate::db::Store;

/// Shared context for all route handlers. Carries only the storage
/// accessor — every request opens its own connection, so there is no
/// mutable state to coordinate.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<Store>,
}

impl ApiContext {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}
