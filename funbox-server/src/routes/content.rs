//! Read-only content endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{debug, error};

use funbox_common::ErrorBody;

use super::AppState;

/// GET /api/jokes - Every joke in insertion order
pub async fn list_jokes(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.all_jokes().await {
        Ok(jokes) => {
            debug!("Serving {} jokes", jokes.len());
            Json(jokes).into_response()
        }
        Err(e) => {
            error!("Failed to read jokes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Failed to fetch jokes")),
            )
                .into_response()
        }
    }
}

/// GET /api/quotes - Every quote in insertion order
pub async fn list_quotes(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.all_quotes().await {
        Ok(quotes) => {
            debug!("Serving {} quotes", quotes.len());
            Json(quotes).into_response()
        }
        Err(e) => {
            error!("Failed to read quotes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Failed to fetch quotes")),
            )
                .into_response()
        }
    }
}
