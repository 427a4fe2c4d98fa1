use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository,
};

const MIN_PASSWORD_CHARS: usize = 6;

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    pub token: String,
    pub new_password: String,
}

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum ResetPasswordError {
    MissingFields,
    PasswordTooShort,
    /// No user holds the token, or the 30-minute window has closed.
    InvalidOrExpiredToken,
    HashingFailed(String),
    StoreError(String),
}

impl std::fmt::Display for ResetPasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetPasswordError::MissingFields => {
                write!(f, "Token and new password are required")
            }
            ResetPasswordError::PasswordTooShort => {
                write!(f, "Password must be at least 6 characters")
            }
            ResetPasswordError::InvalidOrExpiredToken => {
                write!(f, "Invalid or expired reset token")
            }
            ResetPasswordError::HashingFailed(msg) => {
                write!(f, "Password hashing failed: {}", msg)
            }
            ResetPasswordError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for ResetPasswordError {}

// ========================= Use Case =========================

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> ResetPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(user_query: Q, user_repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IResetPasswordUseCase for ResetPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        let token = command.token.trim().to_string();
        let new_password = command.new_password;

        if token.is_empty() || new_password.is_empty() {
            return Err(ResetPasswordError::MissingFields);
        }

        if new_password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ResetPasswordError::PasswordTooShort);
        }

        let user = self
            .user_query
            .find_by_reset_token(&token)
            .await
            .map_err(|e| ResetPasswordError::StoreError(e.to_string()))?
            .ok_or(ResetPasswordError::InvalidOrExpiredToken)?;

        match user.reset_password_expires {
            Some(expires_at) if expires_at > Utc::now() => {}
            _ => return Err(ResetPasswordError::InvalidOrExpiredToken),
        }

        let new_hash = self
            .password_hasher
            .hash_password(&new_password)
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        // update_password also clears the token, so a second attempt with
        // the same code falls into the not-found arm above.
        self.user_repository
            .update_password(user.id, new_hash)
            .await
            .map_err(|e| ResetPasswordError::StoreError(e.to_string()))?;

        Ok(())
    }
}
