use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::orders::application::domain::entities::{Measurements, Order, OrderStatus};
use crate::modules::orders::application::ports::outgoing::order_repository::{
    NewOrder, OrderRepository, OrderRepositoryError,
};

use super::sea_orm_entity::orders::{
    ActiveModel as OrderActiveModel, Column, Entity as OrderEntity, Model as OrderModel,
};

#[derive(Clone, Debug)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: OrderModel) -> Result<Order, OrderRepositoryError> {
        let status: OrderStatus = model
            .status
            .parse()
            .map_err(OrderRepositoryError::DatabaseError)?;

        let measurements: Measurements = serde_json::from_value(model.measurements)
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Order {
            id: model.id,
            user_id: model.user_id,
            tracking_no: model.tracking_no,
            price: model.price,
            dress_type: model.dress_type,
            status,
            user_name: model.user_name,
            user_email: model.user_email,
            measurements,
            created_at: model.created_at.into(),
            picked_up_at: model.picked_up_at.map(Into::into),
        })
    }

    fn measurements_json(
        measurements: &Measurements,
    ) -> Result<serde_json::Value, OrderRepositoryError> {
        serde_json::to_value(measurements)
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))
    }
}

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn insert(&self, order: NewOrder) -> Result<Order, OrderRepositoryError> {
        let active_order = OrderActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(order.user_id),
            tracking_no: Set(order.tracking_no),
            price: Set(order.price),
            dress_type: Set(order.dress_type),
            status: Set(order.status.as_str().to_string()),
            user_name: Set(order.user_name),
            user_email: Set(order.user_email),
            measurements: Set(Self::measurements_json(&order.measurements)?),
            created_at: Set(Utc::now().into()),
            picked_up_at: Set(None),
        };

        let inserted = active_order.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return OrderRepositoryError::TrackingNoTaken;
            }
            OrderRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::to_domain(inserted)
    }

    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, OrderRepositoryError> {
        OrderEntity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?
            .map(Self::to_domain)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError> {
        let models = OrderEntity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::to_domain).collect()
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, OrderRepositoryError> {
        let models = OrderEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::to_domain).collect()
    }

    async fn tracking_no_exists(&self, tracking_no: &str) -> Result<bool, OrderRepositoryError> {
        let count = OrderEntity::find()
            .filter(Column::TrackingNo.eq(tracking_no))
            .count(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn update(&self, order: Order) -> Result<Order, OrderRepositoryError> {
        let model = OrderEntity::find_by_id(order.id)
            .one(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(OrderRepositoryError::OrderNotFound)?;

        let mut active: OrderActiveModel = model.into();
        active.price = Set(order.price);
        active.dress_type = Set(order.dress_type);
        active.status = Set(order.status.as_str().to_string());
        active.measurements = Set(Self::measurements_json(&order.measurements)?);
        active.picked_up_at = Set(order.picked_up_at.map(Into::into));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(updated)
    }

    async fn delete(&self, order_id: Uuid) -> Result<Order, OrderRepositoryError> {
        let model = OrderEntity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(OrderRepositoryError::OrderNotFound)?;

        let order = Self::to_domain(model.clone())?;

        model
            .delete(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        Ok(order)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, OrderRepositoryError> {
        let result = OrderEntity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
