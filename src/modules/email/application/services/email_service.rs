use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::modules::email::application::ports::outgoing::{EmailSender, PasswordResetNotifier};

/// Builds the customer-facing mails and hands them to the transport.
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender>,
    /// Used to build the reset link customers click from the mail.
    frontend_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("frontend_url", &self.frontend_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, frontend_url: String) -> Self {
        Self {
            sender,
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
        }
    }

    fn reset_link(&self, reset_code: &str) -> String {
        format!("{}/reset-password?token={}", self.frontend_url, reset_code)
    }
}

#[async_trait]
impl PasswordResetNotifier for UserEmailService {
    async fn send_password_reset(
        &self,
        to: &str,
        name: &str,
        reset_code: &str,
    ) -> Result<(), String> {
        let subject = "Reset Your Password - Tailor Services";
        let link = self.reset_link(reset_code);
        let body = format!(
            "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
               <h2>Password Reset</h2>\
               <p>Hi <strong>{name}</strong>,</p>\
               <p>We received a request to reset your password. Use the code below, \
                  or follow the link:</p>\
               <p style=\"font-size: 28px; letter-spacing: 4px;\"><strong>{reset_code}</strong></p>\
               <p><a href=\"{link}\">{link}</a></p>\
               <p>This code expires in <strong>30 minutes</strong>. If you did not \
                  request a reset, you can ignore this email.</p>\
             </div>"
        );

        self.sender.send_email(to, subject, &body).await?;
        info!(recipient = %to, "Password reset email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        mails: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
            self.mails.lock().unwrap().push((
                to.to_string(),
                subject.to_string(),
                body.to_string(),
            ));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_reset_mail_carries_code_and_link() {
        let sender = Arc::new(RecordingSender::default());
        let service = UserEmailService::new(sender.clone(), "https://shop.example".to_string());

        service
            .send_password_reset("alice@x.com", "Alice", "123456")
            .await
            .unwrap();

        let mails = sender.mails.lock().unwrap();
        assert_eq!(mails.len(), 1);
        let (to, subject, body) = &mails[0];
        assert_eq!(to, "alice@x.com");
        assert!(subject.contains("Reset"));
        assert!(body.contains("123456"));
        assert!(body.contains("https://shop.example/reset-password?token=123456"));
        assert!(body.contains("Alice"));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_frontend_url_is_tolerated() {
        let sender = Arc::new(RecordingSender::default());
        let service = UserEmailService::new(sender.clone(), "https://shop.example/".to_string());

        service
            .send_password_reset("alice@x.com", "Alice", "654321")
            .await
            .unwrap();

        let mails = sender.mails.lock().unwrap();
        assert!(mails[0]
            .2
            .contains("https://shop.example/reset-password?token=654321"));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        use mockall::mock;

        mock! {
            pub Sender {}
            #[async_trait]
            impl EmailSender for Sender {
                async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
            }
        }

        let mut sender = MockSender::new();
        sender
            .expect_send_email()
            .returning(|_, _, _| Err("connection refused".to_string()));

        let service =
            UserEmailService::new(Arc::new(sender), "https://shop.example".to_string());

        let result = service
            .send_password_reset("alice@x.com", "Alice", "123456")
            .await;

        assert_eq!(result, Err("connection refused".to_string()));
    }
}
