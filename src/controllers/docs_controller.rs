use axum::Json;
use utoipa::OpenApi;

use crate::{
    controllers::order_controller,
    error::ErrorResponse,
    models::{Order, OrderRequest, OrderSide, SideSummary, Summary},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Order Book API", version = "1.0"),
    paths(
        order_controller::create_order,
        order_controller::get_order,
        order_controller::get_summary,
    ),
    components(schemas(Order, OrderRequest, OrderSide, Summary, SideSummary, ErrorResponse)),
    tags((name = "Order", description = "Order submission and daily summaries"))
)]
pub struct ApiDoc;

// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
