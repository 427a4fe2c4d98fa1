use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;

/// Claims carried by a session token. The subject id is re-resolved against
/// the store on every request, so a deleted user's token dies with the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    TokenExpired,
    InvalidSignature,
    MalformedToken,
    EncodingError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}

impl std::error::Error for TokenError {}

pub trait TokenProvider: Send + Sync {
    fn generate_token(&self, user_id: Uuid, email: &str, role: Role)
        -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
