use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::orders::application::domain::entities::{Measurements, Order, OrderStatus};
use crate::modules::orders::application::policy::OrderPolicy;
use crate::modules::orders::application::ports::outgoing::{
    OrderRepository, OrderRepositoryError,
};

// ========================= Command =========================

/// Partial update; `None` leaves a field untouched. An all-`None` patch is
/// a no-op that still returns the order.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrderCommand {
    pub order_id: Uuid,
    pub status: Option<OrderStatus>,
    pub price: Option<f64>,
    pub dress_type: Option<String>,
    pub measurements: Option<Measurements>,
}

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum UpdateOrderError {
    OrderNotFound,
    InvalidPrice,
    /// Strict mode only: the requested status moves backwards.
    IllegalTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
    StoreError(String),
}

impl std::fmt::Display for UpdateOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateOrderError::OrderNotFound => write!(f, "Order not found"),
            UpdateOrderError::InvalidPrice => write!(f, "price must be a positive number"),
            UpdateOrderError::IllegalTransition { from, to } => write!(
                f,
                "Cannot move order from '{}' back to '{}'",
                from.as_str(),
                to.as_str()
            ),
            UpdateOrderError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateOrderError {}

// ========================= Use Case =========================

#[async_trait]
pub trait IUpdateOrderUseCase: Send + Sync {
    async fn execute(&self, command: UpdateOrderCommand) -> Result<Order, UpdateOrderError>;
}

pub struct UpdateOrderUseCase<R>
where
    R: OrderRepository,
{
    orders: R,
    policy: OrderPolicy,
}

impl<R> UpdateOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(orders: R, policy: OrderPolicy) -> Self {
        Self { orders, policy }
    }
}

#[async_trait]
impl<R> IUpdateOrderUseCase for UpdateOrderUseCase<R>
where
    R: OrderRepository,
{
    async fn execute(&self, command: UpdateOrderCommand) -> Result<Order, UpdateOrderError> {
        let mut order = self
            .orders
            .find_by_id(command.order_id)
            .await
            .map_err(|e| UpdateOrderError::StoreError(e.to_string()))?
            .ok_or(UpdateOrderError::OrderNotFound)?;

        if let Some(price) = command.price {
            if price <= 0.0 || !price.is_finite() {
                return Err(UpdateOrderError::InvalidPrice);
            }
            order.price = price;
        }

        if let Some(dress_type) = command.dress_type {
            let dress_type = dress_type.trim().to_string();
            if !dress_type.is_empty() {
                order.dress_type = dress_type;
            }
        }

        if let Some(measurements) = command.measurements {
            order.measurements = measurements;
        }

        if let Some(status) = command.status {
            let from = order.status;

            if self.policy.strict_transitions && status.stage_index() < from.stage_index() {
                return Err(UpdateOrderError::IllegalTransition { from, to: status });
            }

            if self.policy.set_picked_up_at
                && status == OrderStatus::PickedUp
                && from != OrderStatus::PickedUp
            {
                order.picked_up_at = Some(Utc::now());
            }

            order.status = status;
        }

        self.orders
            .update(order)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::OrderNotFound => UpdateOrderError::OrderNotFound,
                other => UpdateOrderError::StoreError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::orders::application::ports::outgoing::NewOrder;
    use std::sync::Mutex;

    struct MockOrderRepo {
        order: Option<Order>,
        updates: Mutex<Vec<Order>>,
    }

    impl MockOrderRepo {
        fn with(order: Option<Order>) -> Self {
            Self {
                order,
                updates: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepo {
        async fn insert(&self, _order: NewOrder) -> Result<Order, OrderRepositoryError> {
            Err(OrderRepositoryError::DatabaseError("not used".to_string()))
        }

        async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, OrderRepositoryError> {
            Ok(self.order.clone().filter(|o| o.id == order_id))
        }

        async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError> {
            Ok(vec![])
        }

        async fn list_by_user(&self, _user_id: Uuid) -> Result<Vec<Order>, OrderRepositoryError> {
            Ok(vec![])
        }

        async fn tracking_no_exists(
            &self,
            _tracking_no: &str,
        ) -> Result<bool, OrderRepositoryError> {
            Ok(false)
        }

        async fn update(&self, order: Order) -> Result<Order, OrderRepositoryError> {
            self.updates.lock().unwrap().push(order.clone());
            Ok(order)
        }

        async fn delete(&self, _order_id: Uuid) -> Result<Order, OrderRepositoryError> {
            Err(OrderRepositoryError::OrderNotFound)
        }

        async fn delete_by_user(&self, _user_id: Uuid) -> Result<u64, OrderRepositoryError> {
            Ok(0)
        }
    }

    fn make_order(status: OrderStatus) -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            tracking_no: "BT-2026-12345".to_string(),
            price: 5000.0,
            dress_type: "Sherwani".to_string(),
            status,
            user_name: "Alice".to_string(),
            user_email: "alice@x.com".to_string(),
            measurements: Measurements::default(),
            created_at: Utc::now(),
            picked_up_at: None,
        }
    }

    #[tokio::test]
    async fn test_partial_update_touches_only_given_fields() {
        let order = make_order(OrderStatus::Pending);
        let order_id = order.id;
        let uc = UpdateOrderUseCase::new(
            MockOrderRepo::with(Some(order)),
            OrderPolicy::permissive(),
        );

        let updated = uc
            .execute(UpdateOrderCommand {
                order_id,
                status: Some(OrderStatus::Cutting),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Cutting);
        assert_eq!(updated.price, 5000.0);
        assert_eq!(updated.dress_type, "Sherwani");
    }

    #[tokio::test]
    async fn test_empty_patch_changes_nothing() {
        let order = make_order(OrderStatus::Stitching);
        let order_id = order.id;
        let original = order.clone();
        let uc = UpdateOrderUseCase::new(
            MockOrderRepo::with(Some(order)),
            OrderPolicy::permissive(),
        );

        let updated = uc
            .execute(UpdateOrderCommand {
                order_id,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.status, original.status);
        assert_eq!(updated.price, original.price);
        assert_eq!(updated.dress_type, original.dress_type);
        assert_eq!(updated.measurements, original.measurements);
        assert_eq!(updated.picked_up_at, original.picked_up_at);
    }

    #[tokio::test]
    async fn test_permissive_mode_accepts_backwards_moves() {
        let order = make_order(OrderStatus::Ready);
        let order_id = order.id;
        let uc = UpdateOrderUseCase::new(
            MockOrderRepo::with(Some(order)),
            OrderPolicy::permissive(),
        );

        let updated = uc
            .execute(UpdateOrderCommand {
                order_id,
                status: Some(OrderStatus::Cutting),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Cutting);
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_backwards_moves() {
        let order = make_order(OrderStatus::Ready);
        let order_id = order.id;
        let policy = OrderPolicy {
            strict_transitions: true,
            set_picked_up_at: false,
        };
        let uc = UpdateOrderUseCase::new(MockOrderRepo::with(Some(order)), policy);

        let result = uc
            .execute(UpdateOrderCommand {
                order_id,
                status: Some(OrderStatus::Cutting),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(UpdateOrderError::IllegalTransition { .. })
        ));
        assert!(uc.orders.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_strict_mode_allows_forward_skips() {
        let order = make_order(OrderStatus::Pending);
        let order_id = order.id;
        let policy = OrderPolicy {
            strict_transitions: true,
            set_picked_up_at: false,
        };
        let uc = UpdateOrderUseCase::new(MockOrderRepo::with(Some(order)), policy);

        let updated = uc
            .execute(UpdateOrderCommand {
                order_id,
                status: Some(OrderStatus::Ready),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Ready);
    }

    #[tokio::test]
    async fn test_picked_up_at_stays_unset_by_default() {
        let order = make_order(OrderStatus::Ready);
        let order_id = order.id;
        let uc = UpdateOrderUseCase::new(
            MockOrderRepo::with(Some(order)),
            OrderPolicy::permissive(),
        );

        let updated = uc
            .execute(UpdateOrderCommand {
                order_id,
                status: Some(OrderStatus::PickedUp),
                ..Default::default()
            })
            .await
            .unwrap();

        // Matches observed production behavior: never populated.
        assert!(updated.picked_up_at.is_none());
    }

    #[tokio::test]
    async fn test_picked_up_at_is_stamped_when_policy_enables_it() {
        let order = make_order(OrderStatus::Ready);
        let order_id = order.id;
        let policy = OrderPolicy {
            strict_transitions: false,
            set_picked_up_at: true,
        };
        let uc = UpdateOrderUseCase::new(MockOrderRepo::with(Some(order)), policy);

        let updated = uc
            .execute(UpdateOrderCommand {
                order_id,
                status: Some(OrderStatus::PickedUp),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(updated.picked_up_at.is_some());
    }

    #[tokio::test]
    async fn test_invalid_price_rejected() {
        let order = make_order(OrderStatus::Pending);
        let order_id = order.id;
        let uc = UpdateOrderUseCase::new(
            MockOrderRepo::with(Some(order)),
            OrderPolicy::permissive(),
        );

        let result = uc
            .execute(UpdateOrderCommand {
                order_id,
                price: Some(-5.0),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(UpdateOrderError::InvalidPrice)));
    }

    #[tokio::test]
    async fn test_unknown_order_not_found() {
        let uc = UpdateOrderUseCase::new(MockOrderRepo::with(None), OrderPolicy::permissive());

        let result = uc
            .execute(UpdateOrderCommand {
                order_id: Uuid::new_v4(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(UpdateOrderError::OrderNotFound)));
    }
}
