#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod views;

// Re-exports for public API
pub use auth::claims::TokenClaims;
pub use auth::extractor::{CompositeExtractor, TokenExtractor, PLATFORM_SIGNATURE_HEADER};
pub use auth::jwt::{mint_token, verify_token};
pub use auth::refresher::{NoopRefresher, StoreBackedRefresher, TokenRefresher};
pub use error::AppError;
pub use extractors::CurrentIdentity;
pub use middleware::{Authenticate, RequestTrace};
pub use services::authorization::{AuthorizationRecord, AuthorizationStore, StoreError};
pub use services::translation::{CatalogTranslator, Translator};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
