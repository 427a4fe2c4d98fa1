use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::use_cases::delete_signup_request::DeleteSignupRequestError;
use crate::shared::api::ApiMessage;
use crate::AppState;

#[delete("/auth/delete-signup/{requestId}")]
pub async fn delete_signup_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request_id = path.into_inner();

    match data
        .delete_signup_request_use_case
        .execute(request_id)
        .await
    {
        Ok(()) => {
            info!(admin = %admin.email, request_id = %request_id, "Signup request deleted");
            ApiMessage::ok("Signup request deleted successfully")
        }

        Err(DeleteSignupRequestError::RequestNotFound) => {
            ApiMessage::not_found("Signup request not found")
        }

        Err(DeleteSignupRequestError::StoreError(ref e)) => {
            error!(error = %e, request_id = %request_id, "Deletion failed");
            ApiMessage::internal_error("Deletion failed")
        }
    }
}
