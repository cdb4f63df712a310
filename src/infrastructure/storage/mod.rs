//! In-memory repository implementations

mod memory;

pub use memory::{
    InMemoryClassRepository, InMemoryRepositoryProvider, InMemoryRoleRepository,
    InMemoryUserRepository,
};
