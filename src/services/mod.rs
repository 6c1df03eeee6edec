pub mod acceptance;
pub mod summary;
pub mod validation;

pub mod order_service;
