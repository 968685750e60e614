//! User service
//!
//! Owns all business rules for user creation, authentication, status
//! transitions and profile edits. The repository is the sole shared
//! mutable resource; every operation is one request-scoped
//! read-modify-write. Concurrent creation of two users with the same
//! username is a known race window (read-then-write, no
//! compare-and-set).

use std::sync::Arc;

use chrono::Local;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, NewUser, UpdateUserDto, User,
    UserRepositoryInterface, UserStatus,
};

/// Timestamp format of the immutable creation date.
const CREATION_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub struct UserService {
    repository: Arc<dyn UserRepositoryInterface>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryInterface>) -> Self {
        Self { repository }
    }

    /// Every user record, in store-native order.
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn get_user(&self, id: i32) -> DomainResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "user",
                field: "id",
                value: id.to_string(),
            })
    }

    /// Register a new user.
    ///
    /// Assigns a fresh token, starts the account OFFLINE and stamps the
    /// creation date. Fails with `Conflict` when the username or the
    /// name is already taken.
    pub async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let token = Uuid::new_v4().to_string();
        let creation_date = Local::now().format(CREATION_DATE_FORMAT).to_string();

        self.check_if_user_exists(&dto).await?;

        let created = self
            .repository
            .insert(NewUser {
                username: dto.username,
                name: dto.name,
                token,
                status: UserStatus::Offline,
                creation_date,
                birthday: None,
            })
            .await?;

        debug!(id = created.id, username = %created.username, "created user");
        Ok(created)
    }

    /// Uniqueness check for the username and the name. Does nothing
    /// when both are unused; fails with `Conflict` otherwise, naming
    /// whichever attribute (or both) collided.
    async fn check_if_user_exists(&self, candidate: &CreateUserDto) -> DomainResult<()> {
        let by_username = self.repository.find_by_username(&candidate.username).await?;
        let by_name = self.repository.find_by_name(&candidate.name).await?;

        let conflict = |attribute: &str, verb: &str| {
            DomainError::Conflict(format!(
                "The {} provided {} not unique. Therefore, the user could not be created!",
                attribute, verb
            ))
        };

        if by_username.is_some() && by_name.is_some() {
            Err(conflict("username and the name", "are"))
        } else if by_username.is_some() {
            Err(conflict("username", "is"))
        } else if by_name.is_some() {
            Err(conflict("name", "is"))
        } else {
            Ok(())
        }
    }

    /// Authenticate a user by username and name.
    ///
    /// Single-active-session invariant: before credentials are checked,
    /// every user is marked OFFLINE. This runs whether or not the
    /// attempt succeeds, so a failed attempt still leaves everyone
    /// offline. On success the user gets a fresh token and goes ONLINE.
    pub async fn login(&self, dto: CreateUserDto) -> DomainResult<User> {
        let token = Uuid::new_v4().to_string();

        self.repository.mark_all_offline().await?;

        let Some(mut user) = self.repository.find_by_username(&dto.username).await? else {
            return Err(DomainError::NotFound {
                entity: "user",
                field: "username",
                value: dto.username,
            });
        };

        if user.username != dto.username || user.name != dto.name {
            return Err(DomainError::Unauthorized(
                "your credentials are not correct".to_string(),
            ));
        }

        user.token = token;
        user.status = UserStatus::Online;

        let user = self.repository.update(user).await?;
        debug!(id = user.id, username = %user.username, "user logged in");
        Ok(user)
    }

    /// Set a user OFFLINE. Logging out an already-offline user is a
    /// no-op success.
    pub async fn logout(&self, id: i32) -> DomainResult<()> {
        let mut user = self.get_user(id).await?;

        if user.status == UserStatus::Offline {
            return Ok(());
        }

        user.status = UserStatus::Offline;
        self.repository.update(user).await?;
        debug!(id, "user logged out");
        Ok(())
    }

    /// Apply a partial profile update. Only the fields present in the
    /// update are touched.
    pub async fn update_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<()> {
        let mut user = self.get_user(id).await?;

        if let Some(username) = dto.username {
            user.username = username;
        }
        if let Some(birthday) = dto.birthday {
            user.birthday = Some(birthday);
        }

        self.repository.update(user).await?;
        Ok(())
    }
}
