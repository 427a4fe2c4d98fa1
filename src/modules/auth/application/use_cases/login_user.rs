use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::{PublicUser, SignupStatus};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, SignupRequestRepository, TokenProvider, UserQuery,
};

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum LoginError {
    MissingFields,
    /// A signup request for this email is still awaiting an admin.
    SignupPending,
    /// The signup request for this email was rejected.
    SignupRejected,
    /// Covers both unknown email and wrong password, indistinguishably.
    InvalidCredentials,
    VerificationFailed(String),
    TokenGenerationFailed(String),
    StoreError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::MissingFields => write!(f, "Email and password are required"),
            LoginError::SignupPending => {
                write!(f, "Signup request is pending admin approval")
            }
            LoginError::SignupRejected => write!(f, "Signup request was rejected"),
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ========================= Response =========================

#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

// ========================= Use Case =========================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResponse, LoginError>;
}

pub struct LoginUserUseCase<Q, R>
where
    Q: UserQuery,
    R: SignupRequestRepository,
{
    user_query: Q,
    signup_requests: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> LoginUserUseCase<Q, R>
where
    Q: UserQuery,
    R: SignupRequestRepository,
{
    pub fn new(
        user_query: Q,
        signup_requests: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_query,
            signup_requests,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> ILoginUserUseCase for LoginUserUseCase<Q, R>
where
    Q: UserQuery,
    R: SignupRequestRepository,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginResponse, LoginError> {
        let email = command.email.trim().to_lowercase();
        let password = command.password;

        if email.is_empty() || password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        // A live signup request explains exactly why this email cannot log
        // in yet; an approved one no longer stands in the way.
        let request = self
            .signup_requests
            .find_by_email(&email)
            .await
            .map_err(|e| LoginError::StoreError(e.to_string()))?;

        if let Some(request) = request {
            match request.status {
                SignupStatus::Pending => return Err(LoginError::SignupPending),
                SignupStatus::Rejected => return Err(LoginError::SignupRejected),
                SignupStatus::Approved => {}
            }
        }

        let user = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| LoginError::StoreError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_match = self
            .password_hasher
            .verify_password(&password, &user.password_hash)
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;

        if !is_match {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_token(user.id, &user.email, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResponse {
            token,
            user: PublicUser::from(&user),
        })
    }
}
