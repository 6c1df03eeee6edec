use axum::{Router, routing::{get, post}};

use crate::{AppState, controllers::order_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/order", post(order_controller::create_order))
        // static segment wins over the :id capture
        .route("/order/summary", get(order_controller::get_summary))
        .route("/order/:id", get(order_controller::get_order))
}
