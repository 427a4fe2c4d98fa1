use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{PublicUser, Role};
use crate::modules::auth::application::ports::outgoing::{
    SignupRequestRepository, UserQuery, UserRepository,
};
use crate::modules::orders::application::ports::outgoing::OrderRepository;

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum DeleteUserError {
    /// Unknown id, or the id names an admin (admins are not deletable here).
    UserNotFound,
    StoreError(String),
}

impl std::fmt::Display for DeleteUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteUserError::UserNotFound => write!(f, "User not found or not deletable"),
            DeleteUserError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteUserError {}

// ========================= Use Case =========================

/// Deleting an account cascades: the user's orders go with it, and any
/// signup request for the email is removed so the address becomes
/// signup-eligible again.
#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, DeleteUserError>;
}

pub struct DeleteUserUseCase<Q, U, O, S>
where
    Q: UserQuery,
    U: UserRepository,
    O: OrderRepository,
    S: SignupRequestRepository,
{
    user_query: Q,
    users: U,
    orders: O,
    signup_requests: S,
}

impl<Q, U, O, S> DeleteUserUseCase<Q, U, O, S>
where
    Q: UserQuery,
    U: UserRepository,
    O: OrderRepository,
    S: SignupRequestRepository,
{
    pub fn new(user_query: Q, users: U, orders: O, signup_requests: S) -> Self {
        Self {
            user_query,
            users,
            orders,
            signup_requests,
        }
    }
}

#[async_trait]
impl<Q, U, O, S> IDeleteUserUseCase for DeleteUserUseCase<Q, U, O, S>
where
    Q: UserQuery,
    U: UserRepository,
    O: OrderRepository,
    S: SignupRequestRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<PublicUser, DeleteUserError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| DeleteUserError::StoreError(e.to_string()))?
            .filter(|u| u.role == Role::User)
            .ok_or(DeleteUserError::UserNotFound)?;

        self.users
            .delete_user(user.id)
            .await
            .map_err(|e| DeleteUserError::StoreError(e.to_string()))?;

        let removed_orders = self
            .orders
            .delete_by_user(user.id)
            .await
            .map_err(|e| DeleteUserError::StoreError(e.to_string()))?;

        self.signup_requests
            .delete_by_email(&user.email)
            .await
            .map_err(|e| DeleteUserError::StoreError(e.to_string()))?;

        info!(
            user_id = %user.id,
            email = %user.email,
            removed_orders,
            "User deleted with cascade"
        );

        Ok(PublicUser::from(&user))
    }
}
