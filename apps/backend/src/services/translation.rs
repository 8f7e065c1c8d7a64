//! Localized message lookup for user-facing rejection text.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const DEFAULT_LANG: &str = "en";

/// Provider of localized user-facing messages.
///
/// A missing translation must never fail the request; implementations fall
/// back to the raw key.
pub trait Translator: Send + Sync {
    fn translate(&self, lang: &str, key: &str) -> String;
}

static CATALOG: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let mut catalog = HashMap::new();

        let mut en = HashMap::new();
        en.insert(
            "errors.authentication.missing_authentication",
            "Authorization is missing or has expired. Please reopen this page from your board.",
        );
        en.insert(
            "errors.authentication.invalid_token",
            "The provided authorization token is invalid.",
        );
        catalog.insert("en", en);

        let mut de = HashMap::new();
        de.insert(
            "errors.authentication.missing_authentication",
            "Die Autorisierung fehlt oder ist abgelaufen. Bitte öffnen Sie diese Seite erneut über Ihr Board.",
        );
        de.insert(
            "errors.authentication.invalid_token",
            "Das übermittelte Autorisierungstoken ist ungültig.",
        );
        catalog.insert("de", de);

        catalog
    });

/// In-process catalog with a lang → en → raw-key fallback chain.
pub struct CatalogTranslator;

impl Translator for CatalogTranslator {
    fn translate(&self, lang: &str, key: &str) -> String {
        CATALOG
            .get(lang)
            .and_then(|messages| messages.get(key))
            .or_else(|| CATALOG.get(DEFAULT_LANG).and_then(|m| m.get(key)))
            .map(|s| s.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}
