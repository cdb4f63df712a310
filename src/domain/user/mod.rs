//! User aggregate
//!
//! Contains the User entity, DTOs, views and repository interface.

pub mod model;
pub mod repository;
pub mod views;

mod dto_create;
mod dto_credentials;
mod dto_get;
mod dto_update;

// Re-export model types
pub use model::{Gender, NewUser, User, UserPatch, DELETED_PASSWORD_SENTINEL};

// Re-export DTOs
pub use dto_create::CreateUserDto;
pub use dto_credentials::{UpdateEmailDto, UpdatePasswordDto};
pub use dto_get::{GetUserDto, SortOrder, UserFilter, UserSortField};
pub use dto_update::UpdateUserDto;

// Re-export views
pub use views::{CreatedUser, UserProfile, UserView};

// Re-export repository trait
pub use repository::UserRepository;
