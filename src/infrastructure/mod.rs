//! External concerns: database connection, entities, repositories

pub mod database;

pub use database::{init_database, DatabaseConfig};
