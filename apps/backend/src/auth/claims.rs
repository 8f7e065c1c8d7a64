//! Verified identity claims carried per request.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Claims decoded from a verified platform token.
///
/// Values of this type only come out of [`crate::auth::jwt::verify_token`];
/// there is no public constructor, so holding a `TokenClaims` means signature
/// verification already succeeded. The middleware stores one in request
/// extensions for the lifetime of that request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// External identifier of the acting principal
    user: String,
    /// External identifier of the workspace the principal acts within
    team: String,
    /// Expiry (seconds since epoch)
    exp: i64,
    /// Issued-at (seconds since epoch), carried for auditing only
    #[serde(skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
}

impl TokenClaims {
    pub(crate) fn new(user: String, team: String, exp: i64, iat: Option<i64>) -> Self {
        Self {
            user,
            team,
            exp,
            iat,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    /// Expiry as seconds since epoch.
    pub fn expires_at(&self) -> i64 {
        self.exp
    }

    pub fn issued_at(&self) -> Option<i64> {
        self.iat
    }

    /// Time remaining until expiry at `now`, or `None` once expired.
    pub fn time_until_expiry(&self, now: SystemTime) -> Option<Duration> {
        let now_secs = now
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        let remaining = self.exp - now_secs;
        if remaining > 0 {
            Some(Duration::from_secs(remaining as u64))
        } else {
            None
        }
    }
}
