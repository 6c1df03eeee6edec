//! Error type for the order book.
//!
//! Domain conditions carry the fixed messages clients see. `IntoResponse`
//! maps every variant onto a status code, so handlers can simply return
//! `Result<_, OrderError>`.

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Field name -> human readable message.
pub type FieldErrors = HashMap<String, String>;

pub type Result<T, E = OrderError> = std::result::Result<T, E>;

pub const SUSPICIOUS_DEVIATION_MESSAGE: &str =
    "The price deviates more than 10% from the daily average.";
pub const TICKER_NOT_FOUND_MESSAGE: &str =
    "The requested ticker could not be found for the given date";
pub const ORDER_NOT_FOUND_MESSAGE: &str = "The order could not be found";

#[derive(Debug, Error)]
pub enum OrderError {
    /// Price outside 90–110% of the same-day baseline.
    #[error("{}", SUSPICIOUS_DEVIATION_MESSAGE)]
    SuspiciousDeviation,

    /// No orders for the ticker on the requested date.
    #[error("{}", TICKER_NOT_FOUND_MESSAGE)]
    TickerNotFound,

    #[error("{}", ORDER_NOT_FOUND_MESSAGE)]
    OrderNotFound,

    /// Request failed field validation before reaching the core.
    #[error("invalid request: {0:?}")]
    Validation(FieldErrors),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<mongodb::error::Error> for OrderError {
    fn from(err: mongodb::error::Error) -> Self {
        OrderError::Storage(err.to_string())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "ERROR")]
    pub status: String,
    pub message: String,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: NaiveDateTime,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            status: "ERROR".to_string(),
            message: message.into(),
            timestamp: Local::now().naive_local(),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            OrderError::Validation(errs) => (StatusCode::BAD_REQUEST, Json(errs)).into_response(),
            OrderError::SuspiciousDeviation => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(message)),
            )
                .into_response(),
            OrderError::TickerNotFound | OrderError::OrderNotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response()
            }
            OrderError::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Server error. Please try again.")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_carry_fixed_messages() {
        assert_eq!(
            OrderError::SuspiciousDeviation.to_string(),
            "The price deviates more than 10% from the daily average."
        );
        assert_eq!(
            OrderError::TickerNotFound.to_string(),
            "The requested ticker could not be found for the given date"
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            OrderError::SuspiciousDeviation.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(OrderError::TickerNotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(OrderError::OrderNotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            OrderError::Validation(FieldErrors::new()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            OrderError::Storage("down".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
