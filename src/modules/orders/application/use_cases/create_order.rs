use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::orders::application::domain::entities::{Measurements, Order, OrderStatus};
use crate::modules::orders::application::ports::outgoing::{
    NewOrder, OrderRepository, OrderRepositoryError,
};
use crate::modules::orders::application::services::tracking::generate_tracking_no;

/// Collision-regeneration budget; a five-digit suffix collides rarely enough
/// that exhausting this means something else is wrong.
const MAX_TRACKING_ATTEMPTS: u32 = 5;

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub user_id: Option<Uuid>,
    pub price: Option<f64>,
    pub dress_type: Option<String>,
    pub status: Option<OrderStatus>,
    pub measurements: Option<Measurements>,
}

// ========================= Error =========================

#[derive(Debug, Clone)]
pub enum CreateOrderError {
    MissingFields,
    InvalidPrice,
    OwnerNotFound,
    TrackingExhausted,
    StoreError(String),
}

impl std::fmt::Display for CreateOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateOrderError::MissingFields => {
                write!(f, "userId, price, and dressType are required")
            }
            CreateOrderError::InvalidPrice => write!(f, "price must be a positive number"),
            CreateOrderError::OwnerNotFound => write!(f, "User not found for this order"),
            CreateOrderError::TrackingExhausted => {
                write!(f, "Could not allocate a unique tracking number")
            }
            CreateOrderError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for CreateOrderError {}

// ========================= Use Case =========================

#[async_trait]
pub trait ICreateOrderUseCase: Send + Sync {
    async fn execute(&self, command: CreateOrderCommand) -> Result<Order, CreateOrderError>;
}

pub struct CreateOrderUseCase<Q, R>
where
    Q: UserQuery,
    R: OrderRepository,
{
    user_query: Q,
    orders: R,
}

impl<Q, R> CreateOrderUseCase<Q, R>
where
    Q: UserQuery,
    R: OrderRepository,
{
    pub fn new(user_query: Q, orders: R) -> Self {
        Self { user_query, orders }
    }

    async fn allocate_tracking_no(&self) -> Result<String, CreateOrderError> {
        for _ in 0..MAX_TRACKING_ATTEMPTS {
            let candidate = generate_tracking_no();
            let taken = self
                .orders
                .tracking_no_exists(&candidate)
                .await
                .map_err(|e| CreateOrderError::StoreError(e.to_string()))?;
            if !taken {
                return Ok(candidate);
            }
            warn!(tracking_no = %candidate, "Tracking number collision, regenerating");
        }
        Err(CreateOrderError::TrackingExhausted)
    }
}

#[async_trait]
impl<Q, R> ICreateOrderUseCase for CreateOrderUseCase<Q, R>
where
    Q: UserQuery,
    R: OrderRepository,
{
    async fn execute(&self, command: CreateOrderCommand) -> Result<Order, CreateOrderError> {
        let user_id = command.user_id.ok_or(CreateOrderError::MissingFields)?;
        let price = command.price.ok_or(CreateOrderError::MissingFields)?;
        let dress_type = command
            .dress_type
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .ok_or(CreateOrderError::MissingFields)?;

        if price <= 0.0 || !price.is_finite() {
            return Err(CreateOrderError::InvalidPrice);
        }

        let owner = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| CreateOrderError::StoreError(e.to_string()))?
            .ok_or(CreateOrderError::OwnerNotFound)?;

        // Insert retries as well: a concurrent create may grab the code
        // between our existence check and the write.
        let mut attempts = 0;
        loop {
            let tracking_no = self.allocate_tracking_no().await?;

            let result = self
                .orders
                .insert(NewOrder {
                    user_id: owner.id,
                    tracking_no,
                    price,
                    dress_type: dress_type.clone(),
                    status: command.status.unwrap_or(OrderStatus::Pending),
                    user_name: owner.name.clone(),
                    user_email: owner.email.clone(),
                    measurements: command.measurements.clone().unwrap_or_default(),
                })
                .await;

            match result {
                Ok(order) => return Ok(order),
                Err(OrderRepositoryError::TrackingNoTaken) => {
                    attempts += 1;
                    if attempts >= MAX_TRACKING_ATTEMPTS {
                        return Err(CreateOrderError::TrackingExhausted);
                    }
                }
                Err(other) => return Err(CreateOrderError::StoreError(other.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{Role, User};
    use crate::modules::auth::application::ports::outgoing::UserQueryError;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct MockUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone().filter(|u| u.id == user_id))
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_reset_token(&self, _token: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn list_by_role(&self, _role: Role) -> Result<Vec<User>, UserQueryError> {
            Ok(vec![])
        }
    }

    #[derive(Default)]
    struct MockOrderRepo {
        taken_tracking_nos: HashSet<String>,
        inserted: Mutex<Vec<NewOrder>>,
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepo {
        async fn insert(&self, order: NewOrder) -> Result<Order, OrderRepositoryError> {
            self.inserted.lock().unwrap().push(order.clone());
            Ok(Order {
                id: Uuid::new_v4(),
                user_id: order.user_id,
                tracking_no: order.tracking_no,
                price: order.price,
                dress_type: order.dress_type,
                status: order.status,
                user_name: order.user_name,
                user_email: order.user_email,
                measurements: order.measurements,
                created_at: Utc::now(),
                picked_up_at: None,
            })
        }

        async fn find_by_id(&self, _order_id: Uuid) -> Result<Option<Order>, OrderRepositoryError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError> {
            Ok(vec![])
        }

        async fn list_by_user(&self, _user_id: Uuid) -> Result<Vec<Order>, OrderRepositoryError> {
            Ok(vec![])
        }

        async fn tracking_no_exists(
            &self,
            tracking_no: &str,
        ) -> Result<bool, OrderRepositoryError> {
            Ok(self.taken_tracking_nos.contains(tracking_no))
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

    fn make_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            password_hash: "hashed:pw".to_string(),
            role: Role::User,
            is_verified: true,
            reset_password_token: None,
            reset_password_expires: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn command(user_id: Option<Uuid>, price: Option<f64>, dress_type: Option<&str>) -> CreateOrderCommand {
        CreateOrderCommand {
            user_id,
            price,
            dress_type: dress_type.map(|d| d.to_string()),
            status: None,
            measurements: None,
        }
    }

    #[tokio::test]
    async fn test_create_order_snapshots_owner_and_defaults() {
        let user = make_user();
        let user_id = user.id;
        let uc = CreateOrderUseCase::new(
            MockUserQuery { user: Some(user) },
            MockOrderRepo::default(),
        );

        let order = uc
            .execute(command(Some(user_id), Some(5000.0), Some("Sherwani")))
            .await
            .unwrap();

        assert_eq!(order.user_id, user_id);
        assert_eq!(order.user_name, "Alice");
        assert_eq!(order.user_email, "alice@x.com");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.measurements, Measurements::default());
        assert!(order.picked_up_at.is_none());

        // BT-YYYY-NNNNN
        let parts: Vec<&str> = order.tracking_no.split('-').collect();
        assert_eq!(parts[0], "BT");
        assert_eq!(parts[2].len(), 5);
    }

    #[tokio::test]
    async fn test_explicit_status_and_measurements_are_kept() {
        let user = make_user();
        let user_id = user.id;
        let uc = CreateOrderUseCase::new(
            MockUserQuery { user: Some(user) },
            MockOrderRepo::default(),
        );

        let mut measurements = Measurements::default();
        measurements.shirt.chest = "40".to_string();

        let order = uc
            .execute(CreateOrderCommand {
                user_id: Some(user_id),
                price: Some(1200.0),
                dress_type: Some("Suit".to_string()),
                status: Some(OrderStatus::Cutting),
                measurements: Some(measurements.clone()),
            })
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Cutting);
        assert_eq!(order.measurements, measurements);
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let uc = CreateOrderUseCase::new(MockUserQuery { user: None }, MockOrderRepo::default());

        for cmd in [
            command(None, Some(100.0), Some("Suit")),
            command(Some(Uuid::new_v4()), None, Some("Suit")),
            command(Some(Uuid::new_v4()), Some(100.0), None),
            command(Some(Uuid::new_v4()), Some(100.0), Some("   ")),
        ] {
            let result = uc.execute(cmd).await;
            assert!(matches!(result, Err(CreateOrderError::MissingFields)));
        }
    }

    #[tokio::test]
    async fn test_non_positive_price_rejected() {
        let uc = CreateOrderUseCase::new(MockUserQuery { user: None }, MockOrderRepo::default());

        for price in [0.0, -10.0] {
            let result = uc
                .execute(command(Some(Uuid::new_v4()), Some(price), Some("Suit")))
                .await;
            assert!(matches!(result, Err(CreateOrderError::InvalidPrice)));
        }
    }

    #[tokio::test]
    async fn test_unknown_owner_is_not_found() {
        let uc = CreateOrderUseCase::new(MockUserQuery { user: None }, MockOrderRepo::default());

        let result = uc
            .execute(command(Some(Uuid::new_v4()), Some(100.0), Some("Suit")))
            .await;

        assert!(matches!(result, Err(CreateOrderError::OwnerNotFound)));
    }
}
