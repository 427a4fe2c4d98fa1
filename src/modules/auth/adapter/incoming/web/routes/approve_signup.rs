use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::PublicUser;
use crate::modules::auth::application::use_cases::approve_signup::{
    ApproveSignupCommand, ApproveSignupError,
};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Serialize)]
struct ApproveSignupResponseBody {
    message: String,
    user: PublicUser,
}

#[post("/auth/approve-signup/{requestId}")]
pub async fn approve_signup_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request_id = path.into_inner();

    let command = ApproveSignupCommand { request_id };

    match data.approve_signup_use_case.execute(command).await {
        Ok(response) => {
            info!(
                admin = %admin.email,
                request_id = %request_id,
                user_id = %response.user.id,
                "Signup request approved"
            );
            HttpResponse::Ok().json(ApproveSignupResponseBody {
                message: "Signup approved. User account created and activated.".to_string(),
                user: response.user,
            })
        }

        Err(ApproveSignupError::RequestNotFound) => {
            ApiMessage::not_found("Signup request not found")
        }

        Err(ApproveSignupError::RequestNotPending) => {
            ApiMessage::bad_request("Request is not pending")
        }

        Err(ApproveSignupError::EmailAlreadyRegistered) => {
            ApiMessage::bad_request("This email is already registered")
        }

        Err(ApproveSignupError::StoreError(ref e)) => {
            error!(error = %e, request_id = %request_id, "Approval failed");
            ApiMessage::internal_error("Approval failed")
        }
    }
}
