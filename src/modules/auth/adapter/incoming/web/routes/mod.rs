mod admin_login;
mod approve_signup;
mod delete_signup;
mod deprecated_otp;
mod forgot_password;
mod login;
mod pending_signups;
mod reject_signup;
mod reset_password;
mod signup;

pub use admin_login::admin_login_handler;
pub use approve_signup::approve_signup_handler;
pub use delete_signup::delete_signup_handler;
pub use deprecated_otp::{resend_otp_handler, verify_email_otp_handler};
pub use forgot_password::forgot_password_handler;
pub use login::login_handler;
pub use pending_signups::pending_signups_handler;
pub use reject_signup::reject_signup_handler;
pub use reset_password::reset_password_handler;
pub use signup::signup_handler;
