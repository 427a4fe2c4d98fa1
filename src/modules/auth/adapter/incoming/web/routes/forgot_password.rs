use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::auth::application::use_cases::forgot_password::{
    ForgotPasswordCommand, ForgotPasswordError, ForgotPasswordOutcome,
};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Deserialize)]
#[serde(default)]
pub struct ForgotPasswordRequestDto {
    pub email: String,
}

impl Default for ForgotPasswordRequestDto {
    fn default() -> Self {
        Self {
            email: String::new(),
        }
    }
}

#[post("/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = ForgotPasswordCommand { email: dto.email };

    match data.forgot_password_use_case.execute(command).await {
        // Same 200 either way; only the wording differs, and the unknown-email
        // variant never touched the store.
        Ok(ForgotPasswordOutcome::UnknownEmail) => {
            ApiMessage::ok("If this email exists, a password reset link has been sent.")
        }

        Ok(ForgotPasswordOutcome::ResetEmailSent) => {
            info!("Password reset email dispatched");
            ApiMessage::ok("Password reset instructions have been sent to your email")
        }

        Err(ForgotPasswordError::MissingEmail) => ApiMessage::bad_request("Email is required"),

        Err(ForgotPasswordError::MailDeliveryFailed(ref e)) => {
            error!(error = %e, "Password reset mail delivery failed");
            ApiMessage::internal_error("Failed to send password reset email. Please try again.")
        }

        Err(ForgotPasswordError::StoreError(ref e)) => {
            error!(error = %e, "Password reset failed");
            ApiMessage::internal_error("Password reset failed")
        }
    }
}
