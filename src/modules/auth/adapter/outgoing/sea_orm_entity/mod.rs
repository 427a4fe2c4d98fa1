pub mod signup_requests;
pub mod users;
