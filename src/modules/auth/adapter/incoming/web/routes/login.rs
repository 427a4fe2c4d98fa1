use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::modules::auth::application::domain::entities::PublicUser;
use crate::modules::auth::application::use_cases::login_user::{LoginCommand, LoginError};
use crate::shared::api::ApiMessage;
use crate::AppState;

#[derive(Deserialize)]
#[serde(default)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

impl Default for LoginRequestDto {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
        }
    }
}

#[derive(Serialize)]
struct LoginResponseBody {
    message: String,
    token: String,
    user: PublicUser,
}

#[post("/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let command = LoginCommand {
        email: dto.email,
        password: dto.password,
    };

    match data.login_user_use_case.execute(command).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");
            HttpResponse::Ok().json(LoginResponseBody {
                message: "Login successful".to_string(),
                token: response.token,
                user: response.user,
            })
        }

        Err(LoginError::MissingFields) => {
            ApiMessage::bad_request("Email and password are required")
        }

        Err(LoginError::SignupPending) => ApiMessage::forbidden(
            "Your signup request is pending admin approval. Please wait.",
        ),

        Err(LoginError::SignupRejected) => {
            ApiMessage::forbidden("Your signup request was rejected. Please contact support.")
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiMessage::unauthorized("Invalid email or password")
        }

        Err(LoginError::VerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiMessage::internal_error("Login failed")
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiMessage::internal_error("Login failed")
        }

        Err(LoginError::StoreError(ref e)) => {
            error!(error = %e, "Login failed");
            ApiMessage::internal_error("Login failed")
        }
    }
}
