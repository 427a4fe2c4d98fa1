use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::SignupStatus;
use crate::modules::auth::application::use_cases::reject_signup::{
    RejectSignupCommand, RejectSignupError,
};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RejectSignupRequestDto {
    pub reason: Option<String>,
}

#[derive(Serialize)]
struct RejectedRequestSummary {
    id: Uuid,
    email: String,
    status: SignupStatus,
}

#[derive(Serialize)]
struct RejectSignupResponseBody {
    message: String,
    request: RejectedRequestSummary,
}

#[post("/auth/reject-signup/{requestId}")]
pub async fn reject_signup_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: Option<web::Json<RejectSignupRequestDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request_id = path.into_inner();
    let reason = req.and_then(|r| r.into_inner().reason);

    let command = RejectSignupCommand { request_id, reason };

    match data.reject_signup_use_case.execute(command).await {
        Ok(response) => {
            info!(
                admin = %admin.email,
                request_id = %request_id,
                "Signup request rejected"
            );
            HttpResponse::Ok().json(RejectSignupResponseBody {
                message: "Signup request rejected".to_string(),
                request: RejectedRequestSummary {
                    id: response.request.id,
                    email: response.request.email,
                    status: response.request.status,
                },
            })
        }

        Err(RejectSignupError::RequestNotFound) => {
            ApiMessage::not_found("Signup request not found")
        }

        Err(RejectSignupError::RequestNotPending) => {
            ApiMessage::bad_request("Request is not pending")
        }

        Err(RejectSignupError::StoreError(ref e)) => {
            error!(error = %e, request_id = %request_id, "Rejection failed");
            ApiMessage::internal_error("Rejection failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{Role, SignupRequest, User};
    use crate::modules::auth::application::ports::outgoing::{TokenProvider, UserQuery};
    use crate::modules::auth::application::use_cases::reject_signup::{
        IRejectSignupUseCase, RejectSignupResponse,
    };
    use crate::tests::support::auth_helper::{test_token_provider, token_for, StaticUserQuery};
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    struct MockReject {
        seen_reason: Arc<Mutex<Option<Option<String>>>>,
    }

    #[async_trait]
    impl IRejectSignupUseCase for MockReject {
        async fn execute(
            &self,
            command: RejectSignupCommand,
        ) -> Result<RejectSignupResponse, RejectSignupError> {
            *self.seen_reason.lock().unwrap() = Some(command.reason.clone());
            Ok(RejectSignupResponse {
                request: SignupRequest {
                    id: command.request_id,
                    name: "Bob".to_string(),
                    email: "bob@x.com".to_string(),
                    password_hash: "hashed:pw".to_string(),
                    status: SignupStatus::Rejected,
                    created_at: Utc::now(),
                    approved_at: None,
                    user_id: None,
                    rejected_at: Some(Utc::now()),
                    rejection_reason: command.reason,
                },
            })
        }
    }

    fn admin_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Shop Owner".to_string(),
            email: "owner@x.com".to_string(),
            password_hash: "hashed:pw".to_string(),
            role: Role::Admin,
            is_verified: true,
            reset_password_token: None,
            reset_password_expires: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_rejection_with_reason() {
        let admin = admin_user();
        let token = token_for(&admin);
        let seen_reason = Arc::new(Mutex::new(None));

        let state = TestAppStateBuilder::default()
            .with_reject_signup(MockReject {
                seen_reason: seen_reason.clone(),
            })
            .build();

        let provider: Arc<dyn TokenProvider> = test_token_provider();
        let query: Arc<dyn UserQuery> = Arc::new(StaticUserQuery::new(vec![admin]));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(provider))
                .app_data(web::Data::new(query))
                .service(reject_signup_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/auth/reject-signup/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(&serde_json::json!({ "reason": "incomplete info" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Signup request rejected");
        assert_eq!(body["request"]["email"], "bob@x.com");
        assert_eq!(body["request"]["status"], "rejected");

        assert_eq!(
            seen_reason.lock().unwrap().clone(),
            Some(Some("incomplete info".to_string()))
        );
    }

    #[actix_web::test]
    async fn test_rejection_without_body_passes_no_reason() {
        let admin = admin_user();
        let token = token_for(&admin);
        let seen_reason = Arc::new(Mutex::new(None));

        let state = TestAppStateBuilder::default()
            .with_reject_signup(MockReject {
                seen_reason: seen_reason.clone(),
            })
            .build();

        let provider: Arc<dyn TokenProvider> = test_token_provider();
        let query: Arc<dyn UserQuery> = Arc::new(StaticUserQuery::new(vec![admin]));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(provider))
                .app_data(web::Data::new(query))
                .service(reject_signup_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/auth/reject-signup/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        assert_eq!(seen_reason.lock().unwrap().clone(), Some(None));
    }
}
