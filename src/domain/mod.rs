//! Core domain types and traits

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{
    CreateUserDto, NewUser, UpdateUserDto, User, UserRepositoryInterface, UserStatus,
};
