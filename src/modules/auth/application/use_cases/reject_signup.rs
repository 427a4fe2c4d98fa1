use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{SignupStatus, SignupRequest};
use crate::modules::auth::application::ports::outgoing::SignupRequestRepository;

const DEFAULT_REJECTION_REASON: &str = "No reason provided";

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct RejectSignupCommand {
    pub request_id: Uuid,
    pub reason: Option<String>,
}

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum RejectSignupError {
    RequestNotFound,
    RequestNotPending,
    StoreError(String),
}

impl std::fmt::Display for RejectSignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectSignupError::RequestNotFound => write!(f, "Signup request not found"),
            RejectSignupError::RequestNotPending => write!(f, "Request is not pending"),
            RejectSignupError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for RejectSignupError {}

// ========================= Response =========================

#[derive(Debug, Clone)]
pub struct RejectSignupResponse {
    pub request: SignupRequest,
}

// ========================= Use Case =========================

#[async_trait]
pub trait IRejectSignupUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RejectSignupCommand,
    ) -> Result<RejectSignupResponse, RejectSignupError>;
}

pub struct RejectSignupUseCase<R>
where
    R: SignupRequestRepository,
{
    signup_requests: R,
}

impl<R> RejectSignupUseCase<R>
where
    R: SignupRequestRepository,
{
    pub fn new(signup_requests: R) -> Self {
        Self { signup_requests }
    }
}

#[async_trait]
impl<R> IRejectSignupUseCase for RejectSignupUseCase<R>
where
    R: SignupRequestRepository,
{
    async fn execute(
        &self,
        command: RejectSignupCommand,
    ) -> Result<RejectSignupResponse, RejectSignupError> {
        let request = self
            .signup_requests
            .find_by_id(command.request_id)
            .await
            .map_err(|e| RejectSignupError::StoreError(e.to_string()))?
            .ok_or(RejectSignupError::RequestNotFound)?;

        if request.status != SignupStatus::Pending {
            return Err(RejectSignupError::RequestNotPending);
        }

        let reason = command
            .reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string());

        let rejected = self
            .signup_requests
            .mark_rejected(request.id, reason, Utc::now())
            .await
            .map_err(|e| RejectSignupError::StoreError(e.to_string()))?;

        Ok(RejectSignupResponse { request: rejected })
    }
}
