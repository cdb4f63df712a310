//! Class management use-cases

pub mod service;

pub use service::ClassService;
