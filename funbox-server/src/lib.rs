//! Funbox Server - serves jokes and quotes to the Funbox client
//!
//! The router is built here so it can be driven in-process by tests;
//! `main.rs` only wires configuration, logging and the listener.

pub mod config;
pub mod routes;
pub mod store;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use funbox_common::{JOKES_PATH, QUOTES_PATH};

pub use routes::AppState;

/// Build the HTTP router over the given state
pub fn app(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/health", get(routes::health))
        .route("/ready", get(routes::ready))
        // Content
        .route(JOKES_PATH, get(routes::list_jokes))
        .route(QUOTES_PATH, get(routes::list_quotes))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}
