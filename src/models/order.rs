use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = String;

    // case sensitive: "buy" is not a side
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            other => Err(format!("unknown order side: {other}")),
        }
    }
}

/// Raw order submission as it arrives over HTTP.
///
/// Every field is optional so that a missing field turns into a field error
/// instead of a body rejection. `id` and `date` are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[schema(value_type = Option<Object>)]
    pub id: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub date: Option<serde_json::Value>,
    #[schema(example = "SAVE")]
    pub ticker: Option<String>,
    /// BUY or SELL
    #[schema(example = "BUY")]
    pub order_side: Option<String>,
    #[schema(example = 100)]
    pub volume: Option<i64>,
    /// Price per unit
    #[schema(example = 235.0)]
    pub price: Option<f64>,
    #[schema(example = "SEK")]
    pub currency: Option<String>,
}

/// A validated order that has not been screened or persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub ticker: String,
    pub side: OrderSide,
    pub volume: i64,
    pub price: f64,
    pub currency: String,
}

/// A persisted order. `id` is assigned by storage, `date` at acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = "6730b5f2c1a4e2f0d8a1b2c3")]
    pub id: String,
    #[schema(value_type = String, format = Date, example = "2024-11-10")]
    pub date: NaiveDate,
    #[schema(example = "SAVE")]
    pub ticker: String,
    pub order_side: OrderSide,
    #[schema(example = 100)]
    pub volume: i64,
    #[schema(example = 235.0)]
    pub price: f64,
    #[schema(example = "SEK")]
    pub currency: String,
}

impl Order {
    pub fn from_new(id: String, date: NaiveDate, order: NewOrder) -> Self {
        Order {
            id,
            date,
            ticker: order.ticker,
            order_side: order.side,
            volume: order.volume,
            price: order.price,
            currency: order.currency,
        }
    }
}
