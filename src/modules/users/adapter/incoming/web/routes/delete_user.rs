use actix_web::{delete, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::PublicUser;
use crate::modules::users::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Serialize)]
struct DeletedUserSummary {
    id: Uuid,
    name: String,
    email: String,
}

#[derive(Serialize)]
struct DeleteUserResponseBody {
    message: String,
    user: DeletedUserSummary,
}

#[delete("/users/{id}")]
pub async fn delete_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.delete_user_use_case.execute(user_id).await {
        Ok(PublicUser {
            id, name, email, ..
        }) => {
            info!(admin = %admin.email, user_id = %id, "User deleted");
            HttpResponse::Ok().json(DeleteUserResponseBody {
                message: "User deleted".to_string(),
                user: DeletedUserSummary { id, name, email },
            })
        }

        Err(DeleteUserError::UserNotFound) => {
            ApiMessage::not_found("User not found or not deletable")
        }

        Err(DeleteUserError::StoreError(ref e)) => {
            error!(error = %e, user_id = %user_id, "Failed to delete user");
            ApiMessage::internal_error("Failed to delete user")
        }
    }
}
