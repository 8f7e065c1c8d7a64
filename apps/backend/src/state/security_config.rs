use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Configuration for token signing and verification.
///
/// The secret must be identical across all instances sharing a token
/// namespace; tokens minted by one instance are verified by any other.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared secret used for both signing and verification
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (pinned, defaults to HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Read the shared secret from `BACKEND_JWT_SECRET`.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = std::env::var("BACKEND_JWT_SECRET")
            .map_err(|_| AppError::config("BACKEND_JWT_SECRET must be set".to_string()))?;
        if secret.trim().is_empty() {
            return Err(AppError::config(
                "BACKEND_JWT_SECRET must not be empty".to_string(),
            ));
        }
        Ok(Self::new(secret.into_bytes()))
    }

    pub fn for_tests() -> Self {
        Self::new(b"test_secret_key_for_testing_purposes_only".to_vec())
    }
}
