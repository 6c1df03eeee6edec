//! Library entrypoint for the order book service.
//!
//! Integration tests under `tests/` build an [`AppState`] around the
//! in-memory repository and drive the router directly.

use std::sync::Arc;

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub mod services;

pub mod controllers;
pub mod routes;

use clock::Clock;
use repository::OrderRepository;

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub clock: Arc<dyn Clock>,
}
