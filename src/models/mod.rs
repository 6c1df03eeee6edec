pub mod order;
pub mod summary;

pub use order::{NewOrder, Order, OrderRequest, OrderSide};
pub use summary::{SideSummary, Summary};
