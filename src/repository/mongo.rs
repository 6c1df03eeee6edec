use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::StreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOptions, IndexOptions},
    Client, Collection, Database, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{NewOrder, Order, OrderSide},
};

use super::OrderRepository;

const ORDERS: &str = "orders";

/// Shape of an order inside the `orders` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    // stored as YYYY-MM-DD
    date: NaiveDate,
    ticker: String,
    order_side: OrderSide,
    volume: i64,
    price: f64,
    currency: String,
}

impl From<OrderDocument> for Order {
    fn from(d: OrderDocument) -> Self {
        Order {
            id: d.id.to_hex(),
            date: d.date,
            ticker: d.ticker,
            order_side: d.order_side,
            volume: d.volume,
            price: d.price,
            currency: d.currency,
        }
    }
}

#[derive(Clone)]
pub struct MongoOrderRepository {
    db: Database,
}

impl MongoOrderRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(client.database(db_name)))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn orders(&self) -> Collection<OrderDocument> {
        self.db.collection::<OrderDocument>(ORDERS)
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<Order>> {
        let find_opts = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        let mut cursor = self.orders().find(filter, find_opts).await?;

        let mut out: Vec<Order> = vec![];
        while let Some(res) = cursor.next().await {
            out.push(res?.into());
        }
        Ok(out)
    }
}

/// Malformed hex ids can never match a stored order.
fn parse_order_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

// field names and encodings must match `OrderDocument`
fn day_filter(ticker: &str, date: NaiveDate) -> Document {
    doc! { "ticker": ticker, "date": date.to_string() }
}

fn baseline_filter(ticker: &str, side: OrderSide, date: NaiveDate) -> Document {
    let mut filter = day_filter(ticker, date);
    filter.insert("orderSide", side.as_str());
    filter
}

/// Summary and screening both filter on ticker + date, screening adds side.
pub async fn ensure_indexes(db: &Database) -> Result<()> {
    let col = db.collection::<Document>(ORDERS);
    let model = IndexModel::builder()
        .keys(doc! { "ticker": 1, "date": 1, "orderSide": 1 })
        .options(IndexOptions::builder().name("ticker_date_side".to_string()).build())
        .build();

    col.create_index(model, None).await?;
    Ok(())
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>> {
        let Some(oid) = parse_order_id(id) else {
            return Ok(None);
        };

        let found = self.orders().find_one(doc! { "_id": oid }, None).await?;
        Ok(found.map(Order::from))
    }

    async fn find_by_ticker_and_side_and_date(
        &self,
        ticker: &str,
        side: OrderSide,
        date: NaiveDate,
    ) -> Result<Vec<Order>> {
        self.find_many(baseline_filter(ticker, side, date)).await
    }

    async fn find_by_ticker_and_date(&self, ticker: &str, date: NaiveDate) -> Result<Vec<Order>> {
        self.find_many(day_filter(ticker, date)).await
    }

    async fn save(&self, order: NewOrder, date: NaiveDate) -> Result<Order> {
        let document = OrderDocument {
            id: ObjectId::new(),
            date,
            ticker: order.ticker,
            order_side: order.side,
            volume: order.volume,
            price: order.price,
            currency: order.currency,
        };

        self.orders().insert_one(&document, None).await?;
        Ok(document.into())
    }

    async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
