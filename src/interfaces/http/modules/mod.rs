pub mod auth;
pub mod classes;
pub mod health;
pub mod request_id;
pub mod roles;
pub mod users;
