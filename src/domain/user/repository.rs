use async_trait::async_trait;

use super::{NewUser, User};
use crate::domain::DomainResult;

/// Persistence contract consumed by the user service.
///
/// The store carries no unique constraints; uniqueness of `username`
/// and `name` is enforced by the service layer. Lookups are indexed
/// queries, never full scans.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<User>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<User>>;

    /// Insert a new record and return the durable copy with its
    /// store-assigned id.
    async fn insert(&self, record: NewUser) -> DomainResult<User>;

    /// Persist the full state of an existing record.
    async fn update(&self, user: User) -> DomainResult<User>;

    /// Bulk-set every user's status to OFFLINE.
    async fn mark_all_offline(&self) -> DomainResult<()>;
}
