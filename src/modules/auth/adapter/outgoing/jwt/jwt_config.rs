use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Session lifetime in days; the shop issues one long-lived token per login.
    pub token_expiry_days: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // Validate secret key length (HS256 requires at least 32 bytes)
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let token_expiry_days = env::var("JWT_EXPIRY_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid JWT_EXPIRY_DAYS value"));

        if token_expiry_days <= 0 {
            panic!("JWT_EXPIRY_DAYS must be positive");
        }

        Self {
            secret_key,
            token_expiry_days,
        }
    }
}
