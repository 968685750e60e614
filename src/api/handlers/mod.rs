//! REST API handlers

pub mod health;
pub mod users;
