use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::orders::application::domain::entities::{Measurements, Order, OrderStatus};

/// Everything needed to persist a new order; id and creation timestamp are
/// assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Uuid,
    pub tracking_no: String,
    pub price: f64,
    pub dress_type: String,
    pub status: OrderStatus,
    pub user_name: String,
    pub user_email: String,
    pub measurements: Measurements,
}

#[derive(Debug)]
pub enum OrderRepositoryError {
    OrderNotFound,
    /// The unique index on tracking_no rejected the insert.
    TrackingNoTaken,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for OrderRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderRepositoryError::OrderNotFound => write!(f, "Order not found"),
            OrderRepositoryError::TrackingNoTaken => write!(f, "Tracking number already taken"),
            OrderRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for OrderRepositoryError {}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: NewOrder) -> Result<Order, OrderRepositoryError>;

    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, OrderRepositoryError>;

    async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError>;

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, OrderRepositoryError>;

    async fn tracking_no_exists(&self, tracking_no: &str) -> Result<bool, OrderRepositoryError>;

    /// Persists the full row as given; the use case decides what changed.
    async fn update(&self, order: Order) -> Result<Order, OrderRepositoryError>;

    /// Returns the deleted order.
    async fn delete(&self, order_id: Uuid) -> Result<Order, OrderRepositoryError>;

    /// Cascade helper for user deletion; returns how many rows went away.
    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, OrderRepositoryError>;
}
