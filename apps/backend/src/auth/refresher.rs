//! Token refresh strategies.
//!
//! A refresher runs only after signature verification and decides whether the
//! token's underlying platform authorization must be re-confirmed with the
//! external store. It never re-verifies the signature.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use async_trait::async_trait;

use crate::auth::claims::TokenClaims;
use crate::error::AppError;
use crate::services::authorization::AuthorizationStore;

/// Tokens closer to expiry than this are re-confirmed with the store.
pub const REFRESH_WINDOW: Duration = Duration::from_secs(60 * 60);

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Strategy for deciding whether verified claims still carry a valid
/// upstream authorization.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn maybe_refresh(&self, claims: &TokenClaims) -> Result<(), AppError>;
}

/// Always succeeds; used when upstream authorization never needs
/// re-confirmation.
pub struct NoopRefresher;

#[async_trait]
impl TokenRefresher for NoopRefresher {
    async fn maybe_refresh(&self, _claims: &TokenClaims) -> Result<(), AppError> {
        Ok(())
    }
}

/// Re-confirms authorization with the store once the token is inside the
/// refresh window. Tokens comfortably far from expiry skip the external call
/// entirely.
pub struct StoreBackedRefresher {
    store: Arc<dyn AuthorizationStore>,
    lookup_timeout: Duration,
}

impl StoreBackedRefresher {
    pub fn new(store: Arc<dyn AuthorizationStore>) -> Self {
        Self {
            store,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }
}

#[async_trait]
impl TokenRefresher for StoreBackedRefresher {
    async fn maybe_refresh(&self, claims: &TokenClaims) -> Result<(), AppError> {
        // Already-expired and expiring-soon tokens take the same branch: both
        // need the store's confirmation before the request may proceed.
        let needs_refresh = match claims.time_until_expiry(SystemTime::now()) {
            Some(remaining) => remaining < REFRESH_WINDOW,
            None => true,
        };

        if !needs_refresh {
            return Ok(());
        }

        let lookup = self.store.find(claims.team(), claims.user());
        match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(Ok(_record)) => Ok(()),
            Ok(Err(err)) => {
                tracing::info!(
                    team = %claims.team(),
                    user = %claims.user(),
                    error = %err,
                    "authorization refresh denied"
                );
                Err(AppError::RefreshDenied)
            }
            Err(_elapsed) => {
                tracing::warn!(
                    team = %claims.team(),
                    user = %claims.user(),
                    "authorization store lookup timed out"
                );
                Err(AppError::RefreshDenied)
            }
        }
    }
}
