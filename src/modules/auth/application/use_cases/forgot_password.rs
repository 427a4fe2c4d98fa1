use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::modules::email::application::ports::outgoing::PasswordResetNotifier;

const RESET_TOKEN_EXPIRATION_MINUTES: i64 = 30;

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct ForgotPasswordCommand {
    pub email: String,
}

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum ForgotPasswordError {
    MissingEmail,
    MailDeliveryFailed(String),
    StoreError(String),
}

impl std::fmt::Display for ForgotPasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForgotPasswordError::MissingEmail => write!(f, "Email is required"),
            ForgotPasswordError::MailDeliveryFailed(msg) => {
                write!(f, "Mail delivery failed: {}", msg)
            }
            ForgotPasswordError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for ForgotPasswordError {}

// ========================= Response =========================

/// Unknown emails are acknowledged without a store write so the endpoint
/// cannot be used to enumerate accounts; the handler words the two outcomes
/// differently but both are 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForgotPasswordOutcome {
    UnknownEmail,
    ResetEmailSent,
}

// ========================= Use Case =========================

#[async_trait]
pub trait IForgotPasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ForgotPasswordCommand,
    ) -> Result<ForgotPasswordOutcome, ForgotPasswordError>;
}

pub struct ForgotPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    reset_notifier: Arc<dyn PasswordResetNotifier>,
}

impl<Q, R> ForgotPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        reset_notifier: Arc<dyn PasswordResetNotifier>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            reset_notifier,
        }
    }
}

/// Six digits, matching the code format customers already know from the
/// old OTP emails.
fn generate_reset_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

#[async_trait]
impl<Q, R> IForgotPasswordUseCase for ForgotPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        command: ForgotPasswordCommand,
    ) -> Result<ForgotPasswordOutcome, ForgotPasswordError> {
        let email = command.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ForgotPasswordError::MissingEmail);
        }

        let user = match self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| ForgotPasswordError::StoreError(e.to_string()))?
        {
            Some(user) => user,
            None => return Ok(ForgotPasswordOutcome::UnknownEmail),
        };

        let reset_code = generate_reset_code();
        let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_EXPIRATION_MINUTES);

        self.user_repository
            .set_reset_token(user.id, reset_code.clone(), expires_at)
            .await
            .map_err(|e| ForgotPasswordError::StoreError(e.to_string()))?;

        self.reset_notifier
            .send_password_reset(&user.email, &user.name, &reset_code)
            .await
            .map_err(ForgotPasswordError::MailDeliveryFailed)?;

        Ok(ForgotPasswordOutcome::ResetEmailSent)
    }
}
