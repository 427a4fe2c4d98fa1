use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::ports::outgoing::{
    OrderRepository, OrderRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteOrderError {
    OrderNotFound,
    StoreError(String),
}

impl std::fmt::Display for DeleteOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteOrderError::OrderNotFound => write!(f, "Order not found"),
            DeleteOrderError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteOrderError {}

#[async_trait]
pub trait IDeleteOrderUseCase: Send + Sync {
    /// Returns the order as it was at deletion time.
    async fn execute(&self, order_id: Uuid) -> Result<Order, DeleteOrderError>;
}

pub struct DeleteOrderUseCase<R>
where
    R: OrderRepository,
{
    orders: R,
}

impl<R> DeleteOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(orders: R) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<R> IDeleteOrderUseCase for DeleteOrderUseCase<R>
where
    R: OrderRepository,
{
    async fn execute(&self, order_id: Uuid) -> Result<Order, DeleteOrderError> {
        self.orders.delete(order_id).await.map_err(|e| match e {
            OrderRepositoryError::OrderNotFound => DeleteOrderError::OrderNotFound,
            other => DeleteOrderError::StoreError(other.to_string()),
        })
    }
}
