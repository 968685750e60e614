//! User aggregate
//!
//! Contains the User model, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_update;

// Re-export model types
pub use model::{NewUser, User, UserStatus};

// Re-export DTOs
pub use dto_create::CreateUserDto;
pub use dto_update::UpdateUserDto;

// Re-export repository trait
pub use repository::UserRepositoryInterface;
