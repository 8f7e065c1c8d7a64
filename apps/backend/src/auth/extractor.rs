//! Token extraction strategies.
//!
//! An extractor locates the raw credential within an inbound request; it does
//! no validation. Strategies are chosen once at construction so the
//! security-critical middleware path has no runtime branching over transports.

use std::collections::HashMap;

use actix_web::http::header::{HeaderMap, HeaderName};
use actix_web::web;

use crate::error::AppError;

/// Signature header set by the embedding platform on API calls.
pub const PLATFORM_SIGNATURE_HEADER: &str = "x-platform-signature";

/// Strategy for locating the raw bearer credential in a request.
///
/// Stateless and reusable across requests.
pub trait TokenExtractor: Send + Sync {
    fn extract(&self, headers: &HeaderMap, query: Option<&str>) -> Result<String, AppError>;
}

/// Reads a named header; if absent or empty, falls back to the `token` query
/// parameter. Covers both header-based API calls and link-based embedded
/// views with a single strategy.
pub struct CompositeExtractor {
    header: HeaderName,
}

impl CompositeExtractor {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }

    /// Composite extractor bound to the platform signature header.
    pub fn platform_signature() -> Self {
        Self::new(HeaderName::from_static(PLATFORM_SIGNATURE_HEADER))
    }
}

impl TokenExtractor for CompositeExtractor {
    fn extract(&self, headers: &HeaderMap, query: Option<&str>) -> Result<String, AppError> {
        if let Some(value) = headers.get(&self.header) {
            if let Ok(token) = value.to_str() {
                if !token.is_empty() {
                    return Ok(token.to_string());
                }
            }
        }

        query_param(query, "token").ok_or(AppError::MissingToken)
    }
}

/// Pull a single non-empty parameter out of a raw query string.
pub(crate) fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query_str = query?;
    let params = web::Query::<HashMap<String, String>>::from_query(query_str).ok()?;
    params.get(name).cloned().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};

    use super::{CompositeExtractor, TokenExtractor, PLATFORM_SIGNATURE_HEADER};
    use crate::error::AppError;

    fn headers_with(name: &'static str, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    #[test]
    fn header_wins_over_query() {
        let extractor = CompositeExtractor::platform_signature();
        let headers = headers_with(PLATFORM_SIGNATURE_HEADER, "header-token");

        let token = extractor
            .extract(&headers, Some("token=query-token"))
            .unwrap();
        assert_eq!(token, "header-token");
    }

    #[test]
    fn falls_back_to_query_param() {
        let extractor = CompositeExtractor::platform_signature();

        let token = extractor
            .extract(&HeaderMap::new(), Some("lang=de&token=query-token"))
            .unwrap();
        assert_eq!(token, "query-token");
    }

    #[test]
    fn empty_header_falls_back_to_query() {
        let extractor = CompositeExtractor::platform_signature();
        let headers = headers_with(PLATFORM_SIGNATURE_HEADER, "");

        let token = extractor.extract(&headers, Some("token=fallback")).unwrap();
        assert_eq!(token, "fallback");
    }

    #[test]
    fn missing_everywhere_fails() {
        let extractor = CompositeExtractor::platform_signature();

        for query in [None, Some("lang=en"), Some("token=")] {
            let result = extractor.extract(&HeaderMap::new(), query);
            assert!(matches!(result, Err(AppError::MissingToken)));
        }
    }
}
