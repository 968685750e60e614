//! User API DTOs
//!
//! Explicit field-by-field construction between the API and the
//! internal representation, no reflection or mapping magic.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CreateUserDto, UpdateUserDto, User};

/// Public summary of a user, returned by list, create and login.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserGetDto {
    /// Store-assigned identifier
    pub id: i32,
    pub username: String,
    /// `ONLINE` or `OFFLINE`
    pub status: String,
}

impl From<User> for UserGetDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            status: user.status.as_str().to_string(),
        }
    }
}

/// Full profile of a single user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: i32,
    pub username: String,
    /// `ONLINE` or `OFFLINE`
    pub status: String,
    /// `dd/MM/yyyy HH:mm:ss`, immutable
    pub creation_date: String,
    pub birthday: Option<String>,
}

impl From<User> for UserProfileDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            status: user.status.as_str().to_string(),
            creation_date: user.creation_date,
            birthday: user.birthday,
        }
    }
}

/// Body for registration and login
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "username": "alice",
    "name": "Alice A"
}))]
pub struct UserPostRequest {
    /// Unique login name
    pub username: String,
    /// Display name, doubles as the password at login
    pub name: String,
}

impl From<UserPostRequest> for CreateUserDto {
    fn from(request: UserPostRequest) -> Self {
        Self {
            username: request.username,
            name: request.name,
        }
    }
}

/// Body for profile edits
///
/// All fields optional; only the present ones are applied.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserUpdateRequest {
    /// New login name
    pub username: Option<String>,
    /// New birthday
    pub birthday: Option<String>,
}

impl From<UserUpdateRequest> for UpdateUserDto {
    fn from(request: UserUpdateRequest) -> Self {
        Self {
            username: request.username,
            birthday: request.birthday,
        }
    }
}
