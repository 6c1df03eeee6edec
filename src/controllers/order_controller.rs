use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{ErrorResponse, FieldErrors, OrderError},
    models::{Order, OrderRequest, Summary},
    services::{order_service, validation},
    AppState,
};

fn form_error(message: String) -> OrderError {
    let mut errs = FieldErrors::new();
    errs.insert("_form".into(), message);
    OrderError::Validation(errs)
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// The ticker symbol
    #[param(example = "SAVE")]
    pub ticker: String,
    /// The date for the order summary
    #[param(value_type = String, format = Date, example = "2024-11-10")]
    pub date: NaiveDate,
}

/// Create a new order
///
/// Add a new order to the order book.
#[utoipa::path(
    post,
    path = "/order",
    tag = "Order",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order accepted", body = Order),
        (status = 400, description = "Invalid input, field name to message"),
        (status = 422, description = "Price deviates more than 10% from the daily average", body = ErrorResponse),
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), OrderError> {
    let Json(req) = payload.map_err(|e| form_error(e.body_text()))?;

    tracing::info!(
        "Creating {} order for {}. Volume: {} Price: {} Currency: {}",
        req.order_side.as_deref().unwrap_or("-"),
        req.ticker.as_deref().unwrap_or("-"),
        req.volume.map(|v| v.to_string()).unwrap_or_else(|| "-".into()),
        req.price.map(|p| p.to_string()).unwrap_or_else(|| "-".into()),
        req.currency.as_deref().unwrap_or("-"),
    );

    let order = validation::validate_order(req).map_err(OrderError::Validation)?;
    let saved = order_service::submit_order(&state, order).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Get order by ID
///
/// Retrieve the details of an order by its ID.
#[utoipa::path(
    get,
    path = "/order/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order not found", body = ErrorResponse),
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, OrderError> {
    tracing::info!("Getting order with ID: {}", id);

    match order_service::get_order(&state, &id).await? {
        Some(order) => Ok(Json(order)),
        None => {
            tracing::error!("Order with ID: {} could not be found", id);
            Err(OrderError::OrderNotFound)
        }
    }
}

/// Get order summary for a given ticker
///
/// Retrieve the summary of a ticker for a given date.
#[utoipa::path(
    get,
    path = "/order/summary",
    tag = "Order",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Buy and sell statistics", body = Summary),
        (status = 400, description = "Missing or malformed query"),
        (status = 404, description = "Ticker not found", body = ErrorResponse),
    )
)]
pub async fn get_summary(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Json<Summary>, OrderError> {
    let Query(q) = query.map_err(|e| form_error(e.body_text()))?;

    tracing::info!("Getting summary for ticker: {} on date: {}", q.ticker, q.date);

    let summary = order_service::get_summary(&state, &q.ticker, q.date).await?;
    Ok(Json(summary))
}
