use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum ListUsersError {
    StoreError(String),
}

impl std::fmt::Display for ListUsersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListUsersError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for ListUsersError {}

/// Account row as the admin dashboard sees it; the hash never leaves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserAccount {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

/// Customer accounts only; admin accounts are not listed or deletable
/// through the users surface.
#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserAccount>, ListUsersError>;
}

pub struct ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self) -> Result<Vec<UserAccount>, ListUsersError> {
        let users = self
            .user_query
            .list_by_role(Role::User)
            .await
            .map_err(|e| ListUsersError::StoreError(e.to_string()))?;

        Ok(users.iter().map(UserAccount::from).collect())
    }
}
