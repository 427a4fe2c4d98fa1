use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::modules::auth::application::domain::entities::PublicUser;
use crate::modules::auth::application::use_cases::admin_login::{
    AdminLoginCommand, AdminLoginError,
};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Deserialize)]
#[serde(default)]
pub struct AdminLoginRequestDto {
    pub email: String,
    pub password: String,
}

impl Default for AdminLoginRequestDto {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
        }
    }
}

#[derive(Serialize)]
struct AdminLoginResponseBody {
    message: String,
    token: String,
    user: PublicUser,
}

/// Failure statuses here are 403 across the board, unlike user login's
/// 401s; clients distinguish the two endpoints by this.
#[post("/auth/admin")]
pub async fn admin_login_handler(
    req: web::Json<AdminLoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Admin login attempt");

    let command = AdminLoginCommand {
        email: dto.email,
        password: dto.password,
    };

    match data.admin_login_use_case.execute(command).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "Admin logged in");
            HttpResponse::Ok().json(AdminLoginResponseBody {
                message: "Admin login successful".to_string(),
                token: response.token,
                user: response.user,
            })
        }

        Err(AdminLoginError::MissingFields) => {
            ApiMessage::bad_request("Email and password are required")
        }

        Err(AdminLoginError::AccessDenied) => {
            warn!("Admin login failed: access denied");
            ApiMessage::forbidden("Admin access denied")
        }

        Err(AdminLoginError::NotVerified) => {
            ApiMessage::forbidden("Admin account not verified")
        }

        Err(AdminLoginError::InvalidCredentials) => {
            warn!("Admin login failed: invalid credentials");
            ApiMessage::forbidden("Invalid email or password")
        }

        Err(AdminLoginError::VerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiMessage::internal_error("Admin login failed")
        }

        Err(AdminLoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiMessage::internal_error("Admin login failed")
        }

        Err(AdminLoginError::StoreError(ref e)) => {
            error!(error = %e, "Admin login failed");
            ApiMessage::internal_error("Admin login failed")
        }
    }
}
