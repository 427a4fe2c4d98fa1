use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::use_cases::list_pending_signups::{
    ListPendingSignupsError, PendingSignup,
};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Serialize)]
struct PendingSignupsResponse {
    requests: Vec<PendingSignup>,
    total: usize,
}

#[get("/auth/pending-signups")]
pub async fn pending_signups_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_pending_signups_use_case.execute().await {
        Ok(requests) => {
            let total = requests.len();
            HttpResponse::Ok().json(PendingSignupsResponse { requests, total })
        }

        Err(ListPendingSignupsError::StoreError(ref e)) => {
            error!(error = %e, "Failed to fetch pending signups");
            ApiMessage::internal_error("Failed to fetch requests")
        }
    }
}
