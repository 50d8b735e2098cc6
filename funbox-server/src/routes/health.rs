//! Health check endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::warn;

use funbox_common::ErrorBody;

use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub jokes: usize,
    pub quotes: usize,
}

/// GET /health - Basic health check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /ready - Readiness check, confirms the store answers reads
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let counts = async {
        let jokes = state.store.all_jokes().await?.len();
        let quotes = state.store.all_quotes().await?.len();
        Ok::<_, crate::store::StoreError>((jokes, quotes))
    };

    match counts.await {
        Ok((jokes, quotes)) => Json(ReadyResponse {
            status: "ready",
            version: env!("CARGO_PKG_VERSION"),
            jokes,
            quotes,
        })
        .into_response(),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorBody::new("Store unavailable")),
            )
                .into_response()
        }
    }
}
