pub mod admin_login;
pub mod approve_signup;
pub mod delete_signup_request;
pub mod forgot_password;
pub mod list_pending_signups;
pub mod login_user;
pub mod reject_signup;
pub mod reset_password;
pub mod submit_signup;
