mod delete_user;
mod list_users;

pub use delete_user::delete_user_handler;
pub use list_users::list_users_handler;
