use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::ports::outgoing::OrderRepository;

#[derive(Debug, Clone)]
pub enum ListMyOrdersError {
    StoreError(String),
}

impl std::fmt::Display for ListMyOrdersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListMyOrdersError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for ListMyOrdersError {}

/// The user id always comes from the authenticated request context, never
/// from client input, so one customer can never read another's orders.
#[async_trait]
pub trait IListMyOrdersUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Order>, ListMyOrdersError>;
}

pub struct ListMyOrdersUseCase<R>
where
    R: OrderRepository,
{
    orders: R,
}

impl<R> ListMyOrdersUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(orders: R) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<R> IListMyOrdersUseCase for ListMyOrdersUseCase<R>
where
    R: OrderRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Order>, ListMyOrdersError> {
        self.orders
            .list_by_user(user_id)
            .await
            .map_err(|e| ListMyOrdersError::StoreError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::orders::application::domain::entities::{Measurements, OrderStatus};
    use crate::modules::orders::application::ports::outgoing::{NewOrder, OrderRepositoryError};
    use chrono::Utc;

    struct MockOrderRepo {
        orders: Vec<Order>,
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepo {
        async fn insert(&self, _order: NewOrder) -> Result<Order, OrderRepositoryError> {
            Err(OrderRepositoryError::DatabaseError("not used".to_string()))
        }

        async fn find_by_id(&self, _order_id: Uuid) -> Result<Option<Order>, OrderRepositoryError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError> {
            Ok(self.orders.clone())
        }

        async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, OrderRepositoryError> {
            Ok(self
                .orders
                .iter()
                .filter(|o| o.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn tracking_no_exists(
            &self,
            _tracking_no: &str,
        ) -> Result<bool, OrderRepositoryError> {
            Ok(false)
        }

        async fn update(&self, _order: Order) -> Result<Order, OrderRepositoryError> {
            Err(OrderRepositoryError::OrderNotFound)
        }

        async fn delete(&self, _order_id: Uuid) -> Result<Order, OrderRepositoryError> {
            Err(OrderRepositoryError::OrderNotFound)
        }

        async fn delete_by_user(&self, _user_id: Uuid) -> Result<u64, OrderRepositoryError> {
            Ok(0)
        }
    }

    fn order_for(user_id: Uuid) -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id,
            tracking_no: format!("BT-2026-{}", 10_000 + rand::random::<u32>() % 90_000),
            price: 100.0,
            dress_type: "Suit".to_string(),
            status: OrderStatus::Pending,
            user_name: "Someone".to_string(),
            user_email: "someone@x.com".to_string(),
            measurements: Measurements::default(),
            created_at: Utc::now(),
            picked_up_at: None,
        }
    }

    #[tokio::test]
    async fn test_returns_exactly_the_callers_orders() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let repo = MockOrderRepo {
            orders: vec![order_for(alice), order_for(bob), order_for(alice)],
        };
        let uc = ListMyOrdersUseCase::new(repo);

        let mine = uc.execute(alice).await.unwrap();

        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|o| o.user_id == alice));
    }

    #[tokio::test]
    async fn test_no_orders_is_an_empty_list() {
        let uc = ListMyOrdersUseCase::new(MockOrderRepo { orders: vec![] });

        let mine = uc.execute(Uuid::new_v4()).await.unwrap();
        assert!(mine.is_empty());
    }
}
