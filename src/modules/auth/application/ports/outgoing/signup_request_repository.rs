use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::SignupRequest;

#[derive(Debug, Clone)]
pub struct NewSignupRequest {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug)]
pub enum SignupRequestRepositoryError {
    /// The unique index on email already holds a live request.
    EmailAlreadyRequested,
    RequestNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for SignupRequestRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupRequestRepositoryError::EmailAlreadyRequested => {
                write!(f, "A signup request already exists for this email")
            }
            SignupRequestRepositoryError::RequestNotFound => write!(f, "Signup request not found"),
            SignupRequestRepositoryError::DatabaseError(msg) => {
                write!(f, "Database error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SignupRequestRepositoryError {}

#[async_trait]
pub trait SignupRequestRepository: Send + Sync {
    async fn create(
        &self,
        request: NewSignupRequest,
    ) -> Result<SignupRequest, SignupRequestRepositoryError>;

    async fn find_by_id(
        &self,
        request_id: Uuid,
    ) -> Result<Option<SignupRequest>, SignupRequestRepositoryError>;

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SignupRequest>, SignupRequestRepositoryError>;

    /// Pending requests only, newest first.
    async fn list_pending(&self) -> Result<Vec<SignupRequest>, SignupRequestRepositoryError>;

    async fn mark_approved(
        &self,
        request_id: Uuid,
        user_id: Uuid,
        approved_at: DateTime<Utc>,
    ) -> Result<SignupRequest, SignupRequestRepositoryError>;

    async fn mark_rejected(
        &self,
        request_id: Uuid,
        reason: String,
        rejected_at: DateTime<Utc>,
    ) -> Result<SignupRequest, SignupRequestRepositoryError>;

    async fn delete_by_id(&self, request_id: Uuid) -> Result<(), SignupRequestRepositoryError>;

    /// Succeeds whether or not a request existed for the email.
    async fn delete_by_email(&self, email: &str) -> Result<(), SignupRequestRepositoryError>;
}
