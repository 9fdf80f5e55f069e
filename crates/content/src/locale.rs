//! Locale resolution from the environment.

use std::env;

use crate::types::DEFAULT_LOCALE;

/// Normalize a raw locale value into a greeting file stem.
///
/// Keeps the part before the first `.`, lowercases it and turns `_` into `-`.
/// Unset or empty values resolve to `en-us`.
///
/// ```
/// use hello_world_content::normalize_locale;
///
/// assert_eq!(normalize_locale(Some("en_US.UTF-8")), "en-us");
/// assert_eq!(normalize_locale(None), "en-us");
/// ```
pub fn normalize_locale(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_LOCALE,
    };
    let stem = raw.split('.').next().unwrap_or_default();
    stem.replace('_', "-").to_lowercase()
}

/// Locale code from `LANG`.
pub fn locale_from_env() -> String {
    let lang = env::var("LANG").ok();
    normalize_locale(lang.as_deref())
}
