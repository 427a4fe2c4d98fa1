use async_trait::async_trait;

use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::ports::outgoing::OrderRepository;

#[derive(Debug, Clone)]
pub enum ListAllOrdersError {
    StoreError(String),
}

impl std::fmt::Display for ListAllOrdersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListAllOrdersError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for ListAllOrdersError {}

#[async_trait]
pub trait IListAllOrdersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Order>, ListAllOrdersError>;
}

pub struct ListAllOrdersUseCase<R>
where
    R: OrderRepository,
{
    orders: R,
}

impl<R> ListAllOrdersUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(orders: R) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<R> IListAllOrdersUseCase for ListAllOrdersUseCase<R>
where
    R: OrderRepository,
{
    async fn execute(&self) -> Result<Vec<Order>, ListAllOrdersError> {
        self.orders
            .list_all()
            .await
            .map_err(|e| ListAllOrdersError::StoreError(e.to_string()))
    }
}
