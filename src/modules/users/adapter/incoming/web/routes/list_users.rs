use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::users::application::use_cases::list_users::{ListUsersError, UserAccount};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Serialize)]
struct UsersResponse {
    users: Vec<UserAccount>,
}

#[get("/users")]
pub async fn list_users_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.list_users_use_case.execute().await {
        Ok(users) => HttpResponse::Ok().json(UsersResponse { users }),

        Err(ListUsersError::StoreError(ref e)) => {
            error!(error = %e, "Failed to fetch users");
            ApiMessage::internal_error("Failed to fetch users")
        }
    }
}
