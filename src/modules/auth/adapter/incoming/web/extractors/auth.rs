use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{TokenProvider, UserQuery};
use crate::shared::api::ApiMessage;

/// The identity attached to a request after the bearer token checks out.
/// Fields come from the store, not the claims, so a rename or role change
/// since token issuance is reflected immediately.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token_provider = req
                .app_data::<web::Data<Arc<dyn TokenProvider>>>()
                .ok_or_else(|| {
                    create_api_error(ApiMessage::internal_error("An unexpected error occurred"))
                })?;

            let user_query = req
                .app_data::<web::Data<Arc<dyn UserQuery>>>()
                .ok_or_else(|| {
                    create_api_error(ApiMessage::internal_error("An unexpected error occurred"))
                })?;

            let token = extract_token_from_header(&req).ok_or_else(|| {
                create_api_error(ApiMessage::unauthorized("No token provided"))
            })?;

            let claims = token_provider.verify_token(&token).map_err(|_| {
                create_api_error(ApiMessage::unauthorized("Invalid or expired token"))
            })?;

            // Deleted user means revoked session; no blocklist needed.
            let user = user_query
                .find_by_id(claims.sub)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Identity lookup failed");
                    create_api_error(ApiMessage::internal_error("An unexpected error occurred"))
                })?
                .ok_or_else(|| {
                    create_api_error(ApiMessage::unauthorized(
                        "User not found or token invalidated",
                    ))
                })?;

            Ok(AuthenticatedUser {
                id: user.id,
                email: user.email,
                role: user.role,
            })
        })
    }
}

/// Admin-gated variant; everything else is identical to `AuthenticatedUser`.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_future = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let user = auth_future.await?;

            if user.role != Role::Admin {
                return Err(create_api_error(ApiMessage::forbidden(
                    "Admin access required",
                )));
            }

            Ok(AdminUser {
                id: user.id,
                email: user.email,
                role: user.role,
            })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
