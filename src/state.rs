//! Shared application state.
//!
//! A single [`AppState`] is constructed at startup and handed to the router,
//! which clones it into every handler via `State` extraction.

use std::sync::Arc;

use crate::store::AccountStore;

/// State passed to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Authoritative account storage.
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: impl AccountStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
