//! Class aggregate
//!
//! Course groups of the institution, with their list query and repository
//! interface.

pub mod model;
pub mod repository;

mod dto;

pub use dto::{ClassFilter, ClassSortField, CreateClassDto, GetClassDto, UpdateClassDto};
pub use model::{Class, ClassPatch, NewClass};
pub use repository::ClassRepository;
