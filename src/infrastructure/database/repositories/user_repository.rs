use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::domain::{
    DomainError, DomainResult, NewUser, User, UserRepositoryInterface, UserStatus,
};
use crate::infrastructure::database::entities::user;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_status_to_domain(status: user::UserStatus) -> UserStatus {
    match status {
        user::UserStatus::Online => UserStatus::Online,
        user::UserStatus::Offline => UserStatus::Offline,
    }
}

fn domain_status_to_entity(status: UserStatus) -> user::UserStatus {
    match status {
        UserStatus::Online => user::UserStatus::Online,
        UserStatus::Offline => user::UserStatus::Offline,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        name: model.name,
        token: model.token,
        status: entity_status_to_domain(model.status),
        creation_date: model.creation_date,
        birthday: model.birthday,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find().all(&self.db).await.map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn insert(&self, record: NewUser) -> DomainResult<User> {
        let new_user = user::ActiveModel {
            username: Set(record.username),
            name: Set(record.name),
            token: Set(record.token),
            status: Set(domain_status_to_entity(record.status)),
            creation_date: Set(record.creation_date),
            birthday: Set(record.birthday),
            ..Default::default()
        };

        let inserted = new_user.insert(&self.db).await.map_err(db_err)?;

        Ok(user_model_to_domain(inserted))
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let active = user::ActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            name: Set(user.name),
            token: Set(user.token),
            status: Set(domain_status_to_entity(user.status)),
            creation_date: Set(user.creation_date),
            birthday: Set(user.birthday),
        };

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(user_model_to_domain(updated))
    }

    async fn mark_all_offline(&self) -> DomainResult<()> {
        user::Entity::update_many()
            .col_expr(
                user::Column::Status,
                Expr::value(user::UserStatus::Offline.to_value()),
            )
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}
