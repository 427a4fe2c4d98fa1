use async_trait::async_trait;

/// What the auth module needs from the mail collaborator: deliver a reset
/// code to a customer. The template and transport stay on this side.
#[async_trait]
pub trait PasswordResetNotifier: Send + Sync {
    async fn send_password_reset(
        &self,
        to: &str,
        name: &str,
        reset_code: &str,
    ) -> Result<(), String>;
}
