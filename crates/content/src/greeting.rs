//! Greeting text loading with locale fallback.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::types::FALLBACK_LOCALE;

/// Read `<dir>/<locale>.txt`, falling back to `<dir>/en-us.txt`, then to empty text.
pub fn read_greeting(dir: &Path, locale: &str) -> String {
    let path = dir.join(format!("{locale}.txt"));
    match fs::read_to_string(&path) {
        Ok(text) => return text,
        Err(e) => debug!(path = %path.display(), error = %e, "greeting not readable, using fallback"),
    }

    let fallback = dir.join(format!("{FALLBACK_LOCALE}.txt"));
    fs::read_to_string(&fallback).unwrap_or_else(|e| {
        warn!(path = %fallback.display(), error = %e, "fallback greeting not readable");
        String::new()
    })
}

/// First line of the greeting (text before the first newline, without a trailing `\r`).
pub fn first_line(greeting: &str) -> &str {
    greeting.lines().next().unwrap_or_default()
}
