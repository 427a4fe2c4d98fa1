//! Actix middleware applying the fixed-window limiter to the
//! authentication-sensitive routes only. Two independent policies: the
//! general auth endpoints share one budget, admin login gets a stricter one.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::shared::api::ApiMessage;
use crate::shared::rate_limit::{FixedWindowLimiter, FixedWindowPolicy};

const AUTH_WINDOW: Duration = Duration::from_secs(15 * 60);
const AUTH_MAX_REQUESTS: u32 = 10;
const ADMIN_LOGIN_MAX_REQUESTS: u32 = 5;

const AUTH_LIMIT_MESSAGE: &str = "Too many login attempts. Please try again later.";
const ADMIN_LIMIT_MESSAGE: &str = "Too many admin login attempts. Please try again later.";

/// Paths throttled by the general auth policy. Admin login has its own.
const GENERAL_AUTH_PATHS: [&str; 6] = [
    "/auth/signup",
    "/auth/login",
    "/auth/forgot-password",
    "/auth/reset-password",
    "/auth/verify-email-otp",
    "/auth/resend-otp",
];

struct Limiters {
    general: FixedWindowLimiter,
    admin_login: FixedWindowLimiter,
}

impl Limiters {
    fn match_route(&self, path: &str) -> Option<(&FixedWindowLimiter, &'static str)> {
        if path == "/auth/admin" {
            return Some((&self.admin_login, ADMIN_LIMIT_MESSAGE));
        }
        if GENERAL_AUTH_PATHS.contains(&path) {
            return Some((&self.general, AUTH_LIMIT_MESSAGE));
        }
        None
    }
}

#[derive(Clone)]
pub struct AuthRateLimit {
    limiters: Arc<Limiters>,
}

impl AuthRateLimit {
    pub fn new() -> Self {
        Self {
            limiters: Arc::new(Limiters {
                general: FixedWindowLimiter::new(FixedWindowPolicy::new(
                    AUTH_MAX_REQUESTS,
                    AUTH_WINDOW,
                )),
                admin_login: FixedWindowLimiter::new(FixedWindowPolicy::new(
                    ADMIN_LOGIN_MAX_REQUESTS,
                    AUTH_WINDOW,
                )),
            }),
        }
    }
}

impl Default for AuthRateLimit {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthRateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthRateLimitMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthRateLimitMiddleware {
            service,
            limiters: Arc::clone(&self.limiters),
        }))
    }
}

pub struct AuthRateLimitMiddleware<S> {
    service: S,
    limiters: Arc<Limiters>,
}

impl<S, B> Service<ServiceRequest> for AuthRateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some((limiter, message)) = self.limiters.match_route(req.path()) {
            let key = client_key(&req);
            let decision = limiter.check(&key);

            if !decision.allowed {
                warn!(
                    client = %key,
                    path = %req.path(),
                    reset_after_secs = decision.reset_after.as_secs(),
                    "Rate limit exceeded"
                );

                let retry_after = decision.reset_after.as_secs().max(1);
                let response = HttpResponse::TooManyRequests()
                    .insert_header(("Retry-After", retry_after.to_string()))
                    .insert_header(("X-RateLimit-Limit", decision.limit.to_string()))
                    .insert_header(("X-RateLimit-Remaining", "0"))
                    .insert_header(("X-RateLimit-Reset", retry_after.to_string()))
                    .json(ApiMessage {
                        message: message.to_string(),
                    });

                let (req, _payload) = req.into_parts();
                let res = ServiceResponse::new(req, response).map_into_right_body();
                return Box::pin(ready(Ok(res)));
            }
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}

/// Window counters key on the bare client IP. `realip_remote_addr` honours
/// forwarding headers; peer addresses arrive as `ip:port`, and the port must
/// not split one client across keys.
fn client_key(req: &ServiceRequest) -> String {
    let info = req.connection_info().clone();
    let addr = info.realip_remote_addr().unwrap_or("unknown");

    match addr.parse::<SocketAddr>() {
        Ok(socket) => socket.ip().to_string(),
        Err(_) => addr.to_string(),
    }
}
