use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::HashFailed => write!(f, "Password hashing failed"),
            HashError::VerifyFailed => write!(f, "Password verification failed"),
        }
    }
}

impl std::error::Error for HashError {}

pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, HashError>;

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError>;
}
