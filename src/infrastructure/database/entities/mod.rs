//! Database entities module

pub mod class;
pub mod role;
pub mod user;

pub use class::Entity as Class;
pub use role::Entity as Role;
pub use user::Entity as User;
