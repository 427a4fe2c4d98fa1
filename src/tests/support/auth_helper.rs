//! Helpers for exercising admin- and user-gated routes: a deterministic
//! token service and a fixed in-memory user store for the extractors.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{
    TokenProvider, UserQuery, UserQueryError,
};

const TEST_SECRET: &str = "FAKE_JWT_SECRET_32_CHARS_DO_NOT_USE";

pub fn test_token_provider() -> Arc<dyn TokenProvider> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        token_expiry_days: 7,
    }))
}

/// A token the test provider accepts for this user.
pub fn token_for(user: &User) -> String {
    test_token_provider()
        .generate_token(user.id, &user.email, user.role)
        .expect("test token generation should not fail")
}

pub struct StaticUserQuery {
    users: Vec<User>,
}

impl StaticUserQuery {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserQuery for StaticUserQuery {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.reset_password_token.as_deref() == Some(token))
            .cloned())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, UserQueryError> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }
}
