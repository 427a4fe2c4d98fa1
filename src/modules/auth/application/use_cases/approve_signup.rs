use async_trait::async_trait;
use chrono::Utc;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{PublicUser, Role, SignupStatus};
use crate::modules::auth::application::ports::outgoing::{
    NewUser, SignupRequestRepository, UserRepository, UserRepositoryError,
};

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct ApproveSignupCommand {
    pub request_id: Uuid,
}

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum ApproveSignupError {
    RequestNotFound,
    RequestNotPending,
    /// A user row already owns the request's email.
    EmailAlreadyRegistered,
    StoreError(String),
}

impl std::fmt::Display for ApproveSignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApproveSignupError::RequestNotFound => write!(f, "Signup request not found"),
            ApproveSignupError::RequestNotPending => write!(f, "Request is not pending"),
            ApproveSignupError::EmailAlreadyRegistered => {
                write!(f, "This email is already registered")
            }
            ApproveSignupError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for ApproveSignupError {}

// ========================= Response =========================

#[derive(Debug, Clone)]
pub struct ApproveSignupResponse {
    pub user: PublicUser,
}

// ========================= Use Case =========================

#[async_trait]
pub trait IApproveSignupUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ApproveSignupCommand,
    ) -> Result<ApproveSignupResponse, ApproveSignupError>;
}

pub struct ApproveSignupUseCase<R, U>
where
    R: SignupRequestRepository,
    U: UserRepository,
{
    signup_requests: R,
    users: U,
}

impl<R, U> ApproveSignupUseCase<R, U>
where
    R: SignupRequestRepository,
    U: UserRepository,
{
    pub fn new(signup_requests: R, users: U) -> Self {
        Self {
            signup_requests,
            users,
        }
    }
}

#[async_trait]
impl<R, U> IApproveSignupUseCase for ApproveSignupUseCase<R, U>
where
    R: SignupRequestRepository,
    U: UserRepository,
{
    async fn execute(
        &self,
        command: ApproveSignupCommand,
    ) -> Result<ApproveSignupResponse, ApproveSignupError> {
        let request = self
            .signup_requests
            .find_by_id(command.request_id)
            .await
            .map_err(|e| ApproveSignupError::StoreError(e.to_string()))?
            .ok_or(ApproveSignupError::RequestNotFound)?;

        if request.status != SignupStatus::Pending {
            return Err(ApproveSignupError::RequestNotPending);
        }

        // The request stored the hash at submission; no rehash here.
        let user = self
            .users
            .create_user(NewUser {
                name: request.name.clone(),
                email: request.email.clone(),
                password_hash: request.password_hash.clone(),
                role: Role::User,
                is_verified: true,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => {
                    ApproveSignupError::EmailAlreadyRegistered
                }
                other => ApproveSignupError::StoreError(other.to_string()),
            })?;

        // Second write of a non-transactional pair. If it fails, delete the
        // user we just created so the request can be approved again later;
        // the compensation itself is best effort.
        if let Err(e) = self
            .signup_requests
            .mark_approved(request.id, user.id, Utc::now())
            .await
        {
            error!(
                request_id = %request.id,
                user_id = %user.id,
                error = %e,
                "Failed to mark signup request approved; removing created user"
            );
            if let Err(cleanup_err) = self.users.delete_user(user.id).await {
                error!(
                    user_id = %user.id,
                    error = %cleanup_err,
                    "Compensation failed; user exists without an approved request"
                );
            }
            return Err(ApproveSignupError::StoreError(e.to_string()));
        }

        Ok(ApproveSignupResponse {
            user: PublicUser::from(&user),
        })
    }
}
