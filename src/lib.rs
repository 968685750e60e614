//! # User Directory
//!
//! Minimal user-account service: register, log in, log out, list
//! users, fetch by id, edit username and birthday.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities, types and traits
//! - **application**: Business logic (user lifecycle and the
//!   online/offline state machine)
//! - **infrastructure**: Database connection, entities, repositories
//! - **api**: REST API with Swagger documentation

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use api::create_api_router;
