//! Users module: admin CRUD and self-service profile endpoints

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
