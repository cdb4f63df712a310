pub mod classes;
pub mod identity;

pub use classes::ClassService;
pub use identity::{AdminSeed, AuthResult, AuthService, DefaultAdmin, RoleService, UserService};
