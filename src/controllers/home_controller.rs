use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::ErrorResponse, AppState};

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("The requested resource could not be found")),
    )
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn health_db(State(state): State<AppState>) -> Response {
    match state.orders.ping().await {
        Ok(_) => (StatusCode::OK, "storage: ok".to_string()).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "storage health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "storage: unavailable".to_string()).into_response()
        }
    }
}
