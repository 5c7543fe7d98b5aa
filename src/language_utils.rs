//! Language utilities for the translation backend's language codes.
//!
//! The backend accepts a fixed set of codes; caller-facing codes outside that
//! set must be mapped through the configured alias table before any request
//! is made.

use std::collections::HashMap;

/// Language codes accepted by the Youdao translation backend.
pub const SUPPORTED_LANGS: &[&str] = &[
    "zh-CHS", "en", "ja", "ko", "fr", "es", "pt", "it", "ru", "vi", "de", "ar", "id", "nl", "th",
];

/// Check whether a code is accepted by the backend as-is.
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGS.contains(&code)
}

/// Resolve a caller-facing code through the alias table, falling back to the
/// code itself when no alias is configured.
pub fn resolve_alias<'a>(code: &'a str, aliases: &'a HashMap<String, String>) -> &'a str {
    aliases.get(code).map(String::as_str).unwrap_or(code)
}

/// Resolve a code and check it against the supported set in one step.
pub fn resolves_to_supported(code: &str, aliases: &HashMap<String, String>) -> bool {
    is_supported(resolve_alias(code, aliases))
}
