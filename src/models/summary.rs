use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Price statistics for one side of a ticker's day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SideSummary {
    /// Number of orders on this side for the day
    #[schema(example = 10)]
    pub count: usize,
    #[schema(example = 10.0)]
    pub min: f64,
    #[schema(example = 15.0)]
    pub avg: f64,
    #[schema(example = 20.0)]
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Summary {
    #[schema(example = "SAVE")]
    pub ticker: String,
    #[schema(value_type = String, format = Date, example = "2024-10-10")]
    pub date: NaiveDate,
    pub buy: SideSummary,
    pub sell: SideSummary,
}
