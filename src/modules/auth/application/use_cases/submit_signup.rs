use async_trait::async_trait;
use chrono::{Duration, Utc};
use email_address::EmailAddress;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::SignupStatus;
use crate::modules::auth::application::ports::outgoing::{
    NewSignupRequest, PasswordHasher, SignupRequestRepository, SignupRequestRepositoryError,
    UserQuery,
};

/// How long a rejected applicant has to wait before resubmitting.
const REJECTION_COOLDOWN_MINUTES: i64 = 10;
const MIN_PASSWORD_CHARS: usize = 6;

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct SubmitSignupCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum SubmitSignupError {
    MissingFields,
    InvalidEmailFormat,
    PasswordTooShort,
    EmailAlreadyRegistered,
    /// A pending request already holds this email.
    AwaitingApproval,
    /// A rejected request holds the email and the cooldown has not elapsed.
    RejectionCooldown { retry_after_minutes: i64 },
    HashingFailed(String),
    StoreError(String),
}

impl std::fmt::Display for SubmitSignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitSignupError::MissingFields => {
                write!(f, "Name, email, and password are required")
            }
            SubmitSignupError::InvalidEmailFormat => write!(f, "Invalid email format"),
            SubmitSignupError::PasswordTooShort => {
                write!(f, "Password must be at least 6 characters")
            }
            SubmitSignupError::EmailAlreadyRegistered => {
                write!(f, "This email is already registered")
            }
            SubmitSignupError::AwaitingApproval => {
                write!(f, "Signup request is pending admin approval")
            }
            SubmitSignupError::RejectionCooldown {
                retry_after_minutes,
            } => write!(
                f,
                "Previous signup was rejected, retry in {} minutes",
                retry_after_minutes
            ),
            SubmitSignupError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            SubmitSignupError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for SubmitSignupError {}

// ========================= Response =========================

#[derive(Debug, Clone)]
pub struct SubmitSignupResponse {
    pub request_id: Uuid,
}

// ========================= Use Case =========================

#[async_trait]
pub trait ISubmitSignupUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitSignupCommand,
    ) -> Result<SubmitSignupResponse, SubmitSignupError>;
}

pub struct SubmitSignupUseCase<Q, R>
where
    Q: UserQuery,
    R: SignupRequestRepository,
{
    user_query: Q,
    signup_requests: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> SubmitSignupUseCase<Q, R>
where
    Q: UserQuery,
    R: SignupRequestRepository,
{
    pub fn new(user_query: Q, signup_requests: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_query,
            signup_requests,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ISubmitSignupUseCase for SubmitSignupUseCase<Q, R>
where
    Q: UserQuery,
    R: SignupRequestRepository,
{
    async fn execute(
        &self,
        command: SubmitSignupCommand,
    ) -> Result<SubmitSignupResponse, SubmitSignupError> {
        let name = command.name.trim().to_string();
        let email = command.email.trim().to_lowercase();
        let password = command.password;

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(SubmitSignupError::MissingFields);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(SubmitSignupError::InvalidEmailFormat);
        }

        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(SubmitSignupError::PasswordTooShort);
        }

        // A verified account already owns the email.
        let existing_user = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| SubmitSignupError::StoreError(e.to_string()))?;
        if existing_user.is_some() {
            return Err(SubmitSignupError::EmailAlreadyRegistered);
        }

        let existing_request = self
            .signup_requests
            .find_by_email(&email)
            .await
            .map_err(|e| SubmitSignupError::StoreError(e.to_string()))?;

        if let Some(request) = existing_request {
            match request.status {
                SignupStatus::Pending => return Err(SubmitSignupError::AwaitingApproval),

                // The account this approval produced was since deleted by an
                // admin; the stale record must not block a fresh signup.
                SignupStatus::Approved => {
                    self.signup_requests
                        .delete_by_email(&email)
                        .await
                        .map_err(|e| SubmitSignupError::StoreError(e.to_string()))?;
                }

                SignupStatus::Rejected => {
                    let cooldown = Duration::minutes(REJECTION_COOLDOWN_MINUTES);
                    if let Some(rejected_at) = request.rejected_at {
                        let elapsed = Utc::now().signed_duration_since(rejected_at);
                        if elapsed < cooldown {
                            let remaining = cooldown - elapsed;
                            let retry_after_minutes = (remaining.num_seconds() + 59) / 60;
                            return Err(SubmitSignupError::RejectionCooldown {
                                retry_after_minutes: retry_after_minutes.max(1),
                            });
                        }
                    }
                    self.signup_requests
                        .delete_by_email(&email)
                        .await
                        .map_err(|e| SubmitSignupError::StoreError(e.to_string()))?;
                }
            }
        }

        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .map_err(|e| SubmitSignupError::HashingFailed(e.to_string()))?;

        let created = self
            .signup_requests
            .create(NewSignupRequest {
                name,
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                // A concurrent signup for the same email won the unique-index
                // race; the loser sees the same answer as the pending case.
                SignupRequestRepositoryError::EmailAlreadyRequested => {
                    SubmitSignupError::AwaitingApproval
                }
                other => SubmitSignupError::StoreError(other.to_string()),
            })?;

        Ok(SubmitSignupResponse {
            request_id: created.id,
        })
    }
}
