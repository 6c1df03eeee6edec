use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::{
    error::Result,
    models::{NewOrder, Order, OrderSide},
};

use super::OrderRepository;

/// Process-local store. Orders come back in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered(&self, keep: impl Fn(&Order) -> bool) -> Vec<Order> {
        let orders = self.orders.read().await;
        orders.iter().filter(|o| keep(o)).cloned().collect()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn find_by_ticker_and_side_and_date(
        &self,
        ticker: &str,
        side: OrderSide,
        date: NaiveDate,
    ) -> Result<Vec<Order>> {
        Ok(self
            .filtered(|o| o.ticker == ticker && o.order_side == side && o.date == date)
            .await)
    }

    async fn find_by_ticker_and_date(&self, ticker: &str, date: NaiveDate) -> Result<Vec<Order>> {
        Ok(self.filtered(|o| o.ticker == ticker && o.date == date).await)
    }

    async fn save(&self, order: NewOrder, date: NaiveDate) -> Result<Order> {
        let saved = Order::from_new(ObjectId::new().to_hex(), date, order);
        self.orders.write().await.push(saved.clone());
        Ok(saved)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
