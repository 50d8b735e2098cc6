//! HTTP route handlers.

pub mod content;
pub mod health;

use std::sync::Arc;

use crate::store::ContentStore;

pub use content::{list_jokes, list_quotes};
pub use health::{health, ready};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}
