#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use backend::services::authorization::{AuthorizationRecord, AuthorizationStore, StoreError};
use backend::{mint_token, AppState};

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Mint a token for `(user, team)` expiring `secs` from now (negative for
/// already-expired tokens), signed with the state's secret.
pub fn token_expiring_in(state: &AppState, user: &str, team: &str, secs: i64) -> String {
    let expires_at = if secs >= 0 {
        SystemTime::now() + Duration::from_secs(secs as u64)
    } else {
        SystemTime::now() - Duration::from_secs((-secs) as u64)
    };

    mint_token(user, team, expires_at, &state.security).expect("token minting should succeed")
}

/// Authorization store double that records how often it was consulted.
pub struct CountingStore {
    authorized: bool,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn authorized() -> Arc<Self> {
        Arc::new(Self {
            authorized: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn revoked() -> Arc<Self> {
        Arc::new(Self {
            authorized: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorizationStore for CountingStore {
    async fn find(&self, team: &str, user: &str) -> Result<AuthorizationRecord, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.authorized {
            Ok(AuthorizationRecord {
                team: team.to_string(),
                user: user.to_string(),
                expires_at: None,
            })
        } else {
            Err(StoreError::NotFound)
        }
    }
}
