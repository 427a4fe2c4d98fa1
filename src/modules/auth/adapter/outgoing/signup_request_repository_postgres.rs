use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{SignupRequest, SignupStatus};
use crate::modules::auth::application::ports::outgoing::signup_request_repository::{
    NewSignupRequest, SignupRequestRepository, SignupRequestRepositoryError,
};

use super::sea_orm_entity::signup_requests::{
    ActiveModel as RequestActiveModel, Column, Entity as RequestEntity, Model as RequestModel,
};

#[derive(Clone, Debug)]
pub struct SignupRequestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SignupRequestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: RequestModel) -> Result<SignupRequest, SignupRequestRepositoryError> {
        let status: SignupStatus = model
            .status
            .parse()
            .map_err(SignupRequestRepositoryError::DatabaseError)?;

        Ok(SignupRequest {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            status,
            created_at: model.created_at.into(),
            approved_at: model.approved_at.map(Into::into),
            user_id: model.user_id,
            rejected_at: model.rejected_at.map(Into::into),
            rejection_reason: model.rejection_reason,
        })
    }

    async fn find_model(
        &self,
        request_id: Uuid,
    ) -> Result<Option<RequestModel>, SignupRequestRepositoryError> {
        RequestEntity::find_by_id(request_id)
            .one(&*self.db)
            .await
            .map_err(|e| SignupRequestRepositoryError::DatabaseError(e.to_string()))
    }
}

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[async_trait]
impl SignupRequestRepository for SignupRequestRepositoryPostgres {
    async fn create(
        &self,
        request: NewSignupRequest,
    ) -> Result<SignupRequest, SignupRequestRepositoryError> {
        let active_request = RequestActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            email: Set(request.email),
            password_hash: Set(request.password_hash),
            status: Set(SignupStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now().into()),
            approved_at: Set(None),
            user_id: Set(None),
            rejected_at: Set(None),
            rejection_reason: Set(None),
        };

        let inserted = active_request.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return SignupRequestRepositoryError::EmailAlreadyRequested;
            }
            SignupRequestRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::to_domain(inserted)
    }

    async fn find_by_id(
        &self,
        request_id: Uuid,
    ) -> Result<Option<SignupRequest>, SignupRequestRepositoryError> {
        self.find_model(request_id)
            .await?
            .map(Self::to_domain)
            .transpose()
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SignupRequest>, SignupRequestRepositoryError> {
        RequestEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| SignupRequestRepositoryError::DatabaseError(e.to_string()))?
            .map(Self::to_domain)
            .transpose()
    }

    async fn list_pending(&self) -> Result<Vec<SignupRequest>, SignupRequestRepositoryError> {
        let models = RequestEntity::find()
            .filter(Column::Status.eq(SignupStatus::Pending.as_str()))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| SignupRequestRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::to_domain).collect()
    }

    async fn mark_approved(
        &self,
        request_id: Uuid,
        user_id: Uuid,
        approved_at: DateTime<Utc>,
    ) -> Result<SignupRequest, SignupRequestRepositoryError> {
        let model = self
            .find_model(request_id)
            .await?
            .ok_or(SignupRequestRepositoryError::RequestNotFound)?;

        let mut active: RequestActiveModel = model.into();
        active.status = Set(SignupStatus::Approved.as_str().to_string());
        active.approved_at = Set(Some(approved_at.into()));
        active.user_id = Set(Some(user_id));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| SignupRequestRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(updated)
    }

    async fn mark_rejected(
        &self,
        request_id: Uuid,
        reason: String,
        rejected_at: DateTime<Utc>,
    ) -> Result<SignupRequest, SignupRequestRepositoryError> {
        let model = self
            .find_model(request_id)
            .await?
            .ok_or(SignupRequestRepositoryError::RequestNotFound)?;

        let mut active: RequestActiveModel = model.into();
        active.status = Set(SignupStatus::Rejected.as_str().to_string());
        active.rejected_at = Set(Some(rejected_at.into()));
        active.rejection_reason = Set(Some(reason));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| SignupRequestRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(updated)
    }

    async fn delete_by_id(&self, request_id: Uuid) -> Result<(), SignupRequestRepositoryError> {
        let model = self
            .find_model(request_id)
            .await?
            .ok_or(SignupRequestRepositoryError::RequestNotFound)?;

        model
            .delete(&*self.db)
            .await
            .map_err(|e| SignupRequestRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_email(&self, email: &str) -> Result<(), SignupRequestRepositoryError> {
        RequestEntity::delete_many()
            .filter(Column::Email.eq(email))
            .exec(&*self.db)
            .await
            .map_err(|e| SignupRequestRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
