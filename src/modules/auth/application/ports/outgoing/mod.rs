pub mod password_hasher;
pub mod signup_request_repository;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use signup_request_repository::{
    NewSignupRequest, SignupRequestRepository, SignupRequestRepositoryError,
};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{NewUser, UserRepository, UserRepositoryError};
