//! Classes module: admin CRUD over classes

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
