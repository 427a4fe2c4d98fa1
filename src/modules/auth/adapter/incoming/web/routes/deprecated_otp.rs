use actix_web::{post, Responder};

use crate::shared::api::ApiMessage;

/// The OTP verification step was removed when signups moved to admin
/// approval. Old clients still call these, so they answer 410 instead of 404.
#[post("/auth/verify-email-otp")]
pub async fn verify_email_otp_handler() -> impl Responder {
    ApiMessage::gone(
        "Email verification step has been removed. Your signup is now directly pending admin approval.",
    )
}

#[post("/auth/resend-otp")]
pub async fn resend_otp_handler() -> impl Responder {
    ApiMessage::gone("OTP step has been removed. Your signup is directly pending admin approval.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_deprecated_endpoints_answer_410() {
        let app = test::init_service(
            App::new()
                .service(verify_email_otp_handler)
                .service(resend_otp_handler),
        )
        .await;

        for uri in ["/auth/verify-email-otp", "/auth/resend-otp"] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 410, "{} should be Gone", uri);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert!(body["message"]
                .as_str()
                .unwrap()
                .contains("pending admin approval"));
        }
    }
}
