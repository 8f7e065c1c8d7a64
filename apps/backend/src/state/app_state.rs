use std::sync::Arc;

use crate::auth::extractor::{CompositeExtractor, TokenExtractor};
use crate::services::translation::{CatalogTranslator, Translator};
use crate::state::security_config::SecurityConfig;

/// Shared application state.
///
/// The extractor here serves the reissuance endpoint; the auth middleware is
/// handed its own strategies at construction time. Everything in this struct
/// is read-only after startup, so it is shared freely across request workers.
#[derive(Clone)]
pub struct AppState {
    /// Token signing and verification settings
    pub security: SecurityConfig,
    /// Credential extraction strategy for standalone token endpoints
    pub extractor: Arc<dyn TokenExtractor>,
    /// Localized message provider for user-facing errors
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(
        security: SecurityConfig,
        extractor: Arc<dyn TokenExtractor>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            security,
            extractor,
            translator,
        }
    }

    /// State with the platform-signature extractor and the built-in catalog.
    pub fn with_defaults(security: SecurityConfig) -> Self {
        Self::new(
            security,
            Arc::new(CompositeExtractor::platform_signature()),
            Arc::new(CatalogTranslator),
        )
    }

    pub fn for_tests() -> Self {
        Self::with_defaults(SecurityConfig::for_tests())
    }
}
