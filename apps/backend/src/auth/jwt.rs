//! Signer: mint and verify compact signed tokens over the shared secret.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::TokenClaims;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Mint a signed token for `(user, team)` expiring at `expires_at`.
///
/// Deterministic for identical inputs and secret apart from the issued-at
/// stamp, which is taken from the wall clock.
pub fn mint_token(
    user: &str,
    team: &str,
    expires_at: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let exp = epoch_secs(expires_at)?;
    let iat = epoch_secs(SystemTime::now())?;

    let claims = TokenClaims::new(user.to_string(), team.to_string(), exp, Some(iat));

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::signing(format!("Failed to encode token: {e}")))
}

/// Verify a raw token string and return its claims.
///
/// Purely computational; safe to call concurrently with a shared secret.
/// Rejects on bad signature, malformed payload, or expiry, and keeps the
/// three failure kinds distinct for internal logging even though callers
/// report them identically to end users.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<TokenClaims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    // Expiry is a hard boundary for this token namespace; no clock leeway.
    validation.leeway = 0;

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::ExpiredToken,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::SignatureMismatch,
        _ => AppError::MalformedToken,
    })
}

fn epoch_secs(t: SystemTime) -> Result<i64, AppError> {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AppError::signing("Timestamp before Unix epoch".to_string()))
}
