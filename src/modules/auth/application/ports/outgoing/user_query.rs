// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;

    /// Lookup by lowercased email; callers normalize before querying.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    /// Finds the user currently holding this reset token, expired or not.
    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, UserQueryError>;

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, UserQueryError>;
}
