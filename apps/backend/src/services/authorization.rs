//! Client interface to the external authorization store.
//!
//! The store is the system of record for whether a `(team, user)` pair still
//! holds a valid platform authorization. This core never persists
//! authorization records itself; it only asks.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Authorization record as reported by the store.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthorizationRecord {
    pub team: String,
    pub user: String,
    /// Upstream access-token expiry (seconds since epoch), when the store
    /// exposes it
    #[serde(default)]
    pub expires_at: Option<i64>,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No valid authorization on record")]
    NotFound,
    #[error("Authorization store unavailable: {detail}")]
    Unavailable { detail: String },
}

/// Lookup interface consumed by the authorization-backed refresher.
///
/// Any error is treated as "refresh denied" by callers.
#[async_trait]
pub trait AuthorizationStore: Send + Sync {
    async fn find(&self, team: &str, user: &str) -> Result<AuthorizationRecord, StoreError>;
}

/// HTTP client against the authorization store service.
pub struct HttpAuthorizationStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthorizationStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AuthorizationStore for HttpAuthorizationStore {
    async fn find(&self, team: &str, user: &str) -> Result<AuthorizationRecord, StoreError> {
        let url = format!(
            "{}/api/authorizations/{}/{}",
            self.base_url.trim_end_matches('/'),
            team,
            user
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable {
                detail: e.to_string(),
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }

        let response = response.error_for_status().map_err(|e| StoreError::Unavailable {
            detail: e.to_string(),
        })?;

        response
            .json::<AuthorizationRecord>()
            .await
            .map_err(|e| StoreError::Unavailable {
                detail: e.to_string(),
            })
    }
}
