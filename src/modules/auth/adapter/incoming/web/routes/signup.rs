use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::modules::auth::application::use_cases::submit_signup::{
    SubmitSignupCommand, SubmitSignupError,
};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Deserialize)]
#[serde(default)]
pub struct SignupRequestDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for SignupRequestDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupResponse {
    message: String,
    request_id: Uuid,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CooldownResponse {
    message: String,
    retry_after: i64,
}

#[post("/auth/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Signup attempt");

    let command = SubmitSignupCommand {
        name: dto.name,
        email: dto.email,
        password: dto.password,
    };

    match data.submit_signup_use_case.execute(command).await {
        Ok(response) => {
            info!(request_id = %response.request_id, "Signup request created");
            HttpResponse::Created().json(SignupResponse {
                message: "Signup successful! Your request is now awaiting admin approval. \
                          You will be able to login once approved."
                    .to_string(),
                request_id: response.request_id,
            })
        }

        Err(SubmitSignupError::MissingFields) => {
            ApiMessage::bad_request("Name, email, and password are required")
        }

        Err(SubmitSignupError::InvalidEmailFormat) => {
            ApiMessage::bad_request("Invalid email format")
        }

        Err(SubmitSignupError::PasswordTooShort) => {
            ApiMessage::bad_request("Password must be at least 6 characters")
        }

        Err(SubmitSignupError::EmailAlreadyRegistered) => {
            ApiMessage::bad_request("This email is already registered")
        }

        Err(SubmitSignupError::AwaitingApproval) => {
            ApiMessage::bad_request("Your signup request is pending admin approval. Please wait.")
        }

        Err(SubmitSignupError::RejectionCooldown {
            retry_after_minutes,
        }) => {
            warn!(retry_after_minutes, "Signup rejected: cooldown active");
            HttpResponse::BadRequest().json(CooldownResponse {
                message: format!(
                    "Your previous signup was rejected. Try again in {} minute{}.",
                    retry_after_minutes,
                    if retry_after_minutes > 1 { "s" } else { "" }
                ),
                retry_after: retry_after_minutes,
            })
        }

        Err(SubmitSignupError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiMessage::internal_error("Signup failed")
        }

        Err(SubmitSignupError::StoreError(ref e)) => {
            error!(error = %e, "Signup failed");
            ApiMessage::internal_error("Signup failed")
        }
    }
}
