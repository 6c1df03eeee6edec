pub mod docs_controller;
pub mod home_controller;
pub mod order_controller;
