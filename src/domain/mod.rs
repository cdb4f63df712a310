//! Domain layer: entities, DTOs and repository contracts.

pub mod class;
pub mod ports;
pub mod repositories;
pub mod role;
pub mod user;

// Re-export commonly used types
pub use class::{
    Class, ClassFilter, ClassPatch, ClassRepository, ClassSortField, CreateClassDto, GetClassDto,
    NewClass, UpdateClassDto,
};
pub use ports::PasswordHasher;
pub use repositories::RepositoryProvider;
pub use role::{Role, RoleName, RoleRepository};
pub use user::{
    CreateUserDto, CreatedUser, Gender, GetUserDto, NewUser, SortOrder, UpdateEmailDto,
    UpdatePasswordDto, UpdateUserDto, User, UserFilter, UserPatch, UserProfile, UserRepository,
    UserSortField, UserView, DELETED_PASSWORD_SENTINEL,
};

pub use crate::shared::errors::{DomainError, DomainResult};
