//! Daily price summary per side.
//!
//! Orders are treated as quotes, not realised trades, so buy and sell sides
//! are summarised separately.

use chrono::NaiveDate;

use crate::{
    error::{OrderError, Result},
    models::{Order, OrderSide, SideSummary, Summary},
};

pub fn calculate_min(orders: &[&Order]) -> f64 {
    orders
        .iter()
        .map(|o| o.price)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

pub fn calculate_avg(orders: &[&Order]) -> f64 {
    if orders.is_empty() {
        return 0.0;
    }
    let sum: f64 = orders.iter().map(|o| o.price).sum();
    sum / orders.len() as f64
}

pub fn calculate_max(orders: &[&Order]) -> f64 {
    orders
        .iter()
        .map(|o| o.price)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

fn side_summary(orders: &[&Order]) -> SideSummary {
    SideSummary {
        count: orders.len(),
        min: calculate_min(orders),
        avg: calculate_avg(orders),
        max: calculate_max(orders),
    }
}

/// Fails with [`OrderError::TickerNotFound`] when `orders` is empty.
pub fn summarize(ticker: &str, date: NaiveDate, orders: &[Order]) -> Result<Summary> {
    if orders.is_empty() {
        return Err(OrderError::TickerNotFound);
    }

    let (buy, sell): (Vec<&Order>, Vec<&Order>) = orders
        .iter()
        .partition(|o| o.order_side == OrderSide::Buy);

    Ok(Summary {
        ticker: ticker.to_string(),
        date,
        buy: side_summary(&buy),
        sell: side_summary(&sell),
    })
}
