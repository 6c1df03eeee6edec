//! Suspicious-deviation screen for incoming orders.
//!
//! A new order is compared against the *baseline*: the average price of the
//! orders already on record for the same ticker, side and day. Prices inside
//! 90–110% of the baseline pass. Without a baseline (no orders yet, or an
//! average of zero) every price passes.

use crate::models::{NewOrder, Order};

const LOWER_FACTOR: f64 = 0.90;
const UPPER_FACTOR: f64 = 1.10;

/// Mean price of `orders`, `0.0` when empty.
pub fn daily_average(orders: &[Order]) -> f64 {
    if orders.is_empty() {
        return 0.0;
    }
    let sum: f64 = orders.iter().map(|o| o.price).sum();
    sum / orders.len() as f64
}

/// Inclusive on both bounds. A zero average always passes.
pub fn is_within_ten_percent_range(price: f64, avg: f64) -> bool {
    let lower = avg * LOWER_FACTOR;
    let upper = avg * UPPER_FACTOR;

    if lower <= price && price <= upper {
        return true;
    }
    // first order of the day has nothing to deviate from
    avg == 0.0
}

/// `baseline` must hold the same-day orders for the order's ticker and side.
pub fn accept(order: &NewOrder, baseline: &[Order]) -> bool {
    is_within_ten_percent_range(order.price, daily_average(baseline))
}
