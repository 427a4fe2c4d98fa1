use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{SignupRequest, SignupStatus};
use crate::modules::auth::application::ports::outgoing::SignupRequestRepository;

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum ListPendingSignupsError {
    StoreError(String),
}

impl std::fmt::Display for ListPendingSignupsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListPendingSignupsError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for ListPendingSignupsError {}

// ========================= Response =========================

/// What the admin dashboard sees per request. The stored hash stays behind.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSignup {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: SignupStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&SignupRequest> for PendingSignup {
    fn from(request: &SignupRequest) -> Self {
        Self {
            id: request.id,
            name: request.name.clone(),
            email: request.email.clone(),
            status: request.status,
            created_at: request.created_at,
        }
    }
}

// ========================= Use Case =========================

#[async_trait]
pub trait IListPendingSignupsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PendingSignup>, ListPendingSignupsError>;
}

pub struct ListPendingSignupsUseCase<R>
where
    R: SignupRequestRepository,
{
    signup_requests: R,
}

impl<R> ListPendingSignupsUseCase<R>
where
    R: SignupRequestRepository,
{
    pub fn new(signup_requests: R) -> Self {
        Self { signup_requests }
    }
}

#[async_trait]
impl<R> IListPendingSignupsUseCase for ListPendingSignupsUseCase<R>
where
    R: SignupRequestRepository,
{
    async fn execute(&self) -> Result<Vec<PendingSignup>, ListPendingSignupsError> {
        let requests = self
            .signup_requests
            .list_pending()
            .await
            .map_err(|e| ListPendingSignupsError::StoreError(e.to_string()))?;

        Ok(requests.iter().map(PendingSignup::from).collect())
    }
}
