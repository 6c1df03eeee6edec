//! Storage collaborator for orders.
//!
//! The services only talk to [`OrderRepository`]; the backend is picked at
//! startup from [`crate::config::StorageKind`].

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::Result,
    models::{NewOrder, Order, OrderSide},
};

pub mod memory;
pub mod mongo;

pub use memory::InMemoryOrderRepository;
pub use mongo::MongoOrderRepository;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Unknown or malformed ids resolve to `None`.
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>>;

    async fn find_by_ticker_and_side_and_date(
        &self,
        ticker: &str,
        side: OrderSide,
        date: NaiveDate,
    ) -> Result<Vec<Order>>;

    async fn find_by_ticker_and_date(&self, ticker: &str, date: NaiveDate) -> Result<Vec<Order>>;

    /// Persists the order stamped with `date` and assigns its id.
    async fn save(&self, order: NewOrder, date: NaiveDate) -> Result<Order>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<()>;
}
