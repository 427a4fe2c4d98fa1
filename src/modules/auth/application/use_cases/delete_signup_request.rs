use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    SignupRequestRepository, SignupRequestRepositoryError,
};

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum DeleteSignupRequestError {
    RequestNotFound,
    StoreError(String),
}

impl std::fmt::Display for DeleteSignupRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteSignupRequestError::RequestNotFound => write!(f, "Signup request not found"),
            DeleteSignupRequestError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteSignupRequestError {}

// ========================= Use Case =========================

/// The admin escape hatch: removal works on any status, pending or terminal.
#[async_trait]
pub trait IDeleteSignupRequestUseCase: Send + Sync {
    async fn execute(&self, request_id: Uuid) -> Result<(), DeleteSignupRequestError>;
}

pub struct DeleteSignupRequestUseCase<R>
where
    R: SignupRequestRepository,
{
    signup_requests: R,
}

impl<R> DeleteSignupRequestUseCase<R>
where
    R: SignupRequestRepository,
{
    pub fn new(signup_requests: R) -> Self {
        Self { signup_requests }
    }
}

#[async_trait]
impl<R> IDeleteSignupRequestUseCase for DeleteSignupRequestUseCase<R>
where
    R: SignupRequestRepository,
{
    async fn execute(&self, request_id: Uuid) -> Result<(), DeleteSignupRequestError> {
        self.signup_requests
            .delete_by_id(request_id)
            .await
            .map_err(|e| match e {
                SignupRequestRepositoryError::RequestNotFound => {
                    DeleteSignupRequestError::RequestNotFound
                }
                other => DeleteSignupRequestError::StoreError(other.to_string()),
            })
    }
}
