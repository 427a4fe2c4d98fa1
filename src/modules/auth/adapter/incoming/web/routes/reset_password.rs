use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::auth::application::use_cases::reset_password::{
    ResetPasswordCommand, ResetPasswordError,
};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResetPasswordRequestDto {
    pub token: String,
    pub new_password: String,
}

impl Default for ResetPasswordRequestDto {
    fn default() -> Self {
        Self {
            token: String::new(),
            new_password: String::new(),
        }
    }
}

#[post("/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = ResetPasswordCommand {
        token: dto.token,
        new_password: dto.new_password,
    };

    match data.reset_password_use_case.execute(command).await {
        Ok(()) => {
            info!("Password reset completed");
            ApiMessage::ok("Password reset successful. You can now login with your new password.")
        }

        Err(ResetPasswordError::MissingFields) => {
            ApiMessage::bad_request("Token and new password are required")
        }

        Err(ResetPasswordError::PasswordTooShort) => {
            ApiMessage::bad_request("Password must be at least 6 characters")
        }

        Err(ResetPasswordError::InvalidOrExpiredToken) => ApiMessage::bad_request(
            "Invalid or expired reset token. Request a new password reset.",
        ),

        Err(ResetPasswordError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiMessage::internal_error("Password reset failed")
        }

        Err(ResetPasswordError::StoreError(ref e)) => {
            error!(error = %e, "Password reset failed");
            ApiMessage::internal_error("Password reset failed")
        }
    }
}
