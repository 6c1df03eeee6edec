use chrono::NaiveDate;

use crate::{
    error::{OrderError, Result},
    models::{NewOrder, Order, Summary},
    AppState,
};

use super::{acceptance, summary};

/// Screens the order against today's baseline for its ticker and side and
/// persists it, stamped with today's date, when it passes.
///
/// The baseline read and the write are not atomic: two concurrent orders can
/// both be screened against the same baseline.
pub async fn submit_order(state: &AppState, order: NewOrder) -> Result<Order> {
    let today = state.clock.today();

    let baseline = state
        .orders
        .find_by_ticker_and_side_and_date(&order.ticker, order.side, today)
        .await?;

    if !acceptance::accept(&order, &baseline) {
        tracing::warn!(
            ticker = %order.ticker,
            side = %order.side,
            price = order.price,
            baseline_avg = acceptance::daily_average(&baseline),
            "rejecting order with suspicious price deviation"
        );
        return Err(OrderError::SuspiciousDeviation);
    }

    let saved = state.orders.save(order, today).await?;
    tracing::debug!(id = %saved.id, date = %saved.date, "order saved");
    Ok(saved)
}

pub async fn get_order(state: &AppState, id: &str) -> Result<Option<Order>> {
    state.orders.find_by_id(id).await
}

/// Buy and sell statistics for `ticker` on `date`.
pub async fn get_summary(state: &AppState, ticker: &str, date: NaiveDate) -> Result<Summary> {
    let orders = state.orders.find_by_ticker_and_date(ticker, date).await?;

    if orders.is_empty() {
        tracing::error!(%ticker, %date, "no orders found for ticker");
    }

    summary::summarize(ticker, date, &orders)
}
