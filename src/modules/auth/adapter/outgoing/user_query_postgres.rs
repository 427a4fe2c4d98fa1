use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(super) fn to_domain(model: UserModel) -> Result<User, String> {
    let role: Role = model.role.parse()?;
    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role,
        is_verified: model.is_verified,
        reset_password_token: model.reset_password_token,
        reset_password_expires: model.reset_password_expires.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .map(|m| to_domain(m).map_err(UserQueryError::DatabaseError))
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .map(|m| to_domain(m).map_err(UserQueryError::DatabaseError))
            .transpose()
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, UserQueryError> {
        UserEntity::find()
            .filter(Column::ResetPasswordToken.eq(token))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .map(|m| to_domain(m).map_err(UserQueryError::DatabaseError))
            .transpose()
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, UserQueryError> {
        let models = UserEntity::find()
            .filter(Column::Role.eq(role.as_str()))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(|m| to_domain(m).map_err(UserQueryError::DatabaseError))
            .collect()
    }
}
