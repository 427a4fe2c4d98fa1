use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::{PublicUser, Role};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery,
};

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct AdminLoginCommand {
    pub email: String,
    pub password: String,
}

// ========================= Error =========================

/// Admin login failures all surface as 403 at the boundary, a deliberate
/// asymmetry with the 401s of user login that external clients rely on.
#[derive(Debug, Clone)]
pub enum AdminLoginError {
    MissingFields,
    /// No such account, or the account is not an admin.
    AccessDenied,
    NotVerified,
    InvalidCredentials,
    VerificationFailed(String),
    TokenGenerationFailed(String),
    StoreError(String),
}

impl std::fmt::Display for AdminLoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminLoginError::MissingFields => write!(f, "Email and password are required"),
            AdminLoginError::AccessDenied => write!(f, "Admin access denied"),
            AdminLoginError::NotVerified => write!(f, "Admin account not verified"),
            AdminLoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            AdminLoginError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            AdminLoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            AdminLoginError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for AdminLoginError {}

// ========================= Response =========================

#[derive(Debug, Clone)]
pub struct AdminLoginResponse {
    pub token: String,
    pub user: PublicUser,
}

// ========================= Use Case =========================

#[async_trait]
pub trait IAdminLoginUseCase: Send + Sync {
    async fn execute(&self, command: AdminLoginCommand)
        -> Result<AdminLoginResponse, AdminLoginError>;
}

pub struct AdminLoginUseCase<Q>
where
    Q: UserQuery,
{
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> AdminLoginUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> IAdminLoginUseCase for AdminLoginUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(
        &self,
        command: AdminLoginCommand,
    ) -> Result<AdminLoginResponse, AdminLoginError> {
        let email = command.email.trim().to_lowercase();
        let password = command.password;

        if email.is_empty() || password.is_empty() {
            return Err(AdminLoginError::MissingFields);
        }

        let user = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| AdminLoginError::StoreError(e.to_string()))?
            .ok_or(AdminLoginError::AccessDenied)?;

        if user.role != Role::Admin {
            return Err(AdminLoginError::AccessDenied);
        }

        if !user.is_verified {
            return Err(AdminLoginError::NotVerified);
        }

        let is_match = self
            .password_hasher
            .verify_password(&password, &user.password_hash)
            .map_err(|e| AdminLoginError::VerificationFailed(e.to_string()))?;

        if !is_match {
            return Err(AdminLoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_token(user.id, &user.email, user.role)
            .map_err(|e| AdminLoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AdminLoginResponse {
            token,
            user: PublicUser::from(&user),
        })
    }
}
