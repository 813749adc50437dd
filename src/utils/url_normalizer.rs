//! Input normalization applied before QR encoding.
//!
//! Bare host names typed by users (`example.com`, `shop.example.com/sale`)
//! are turned into links by prepending `https://`. Everything else is
//! encoded verbatim.

use regex::Regex;
use std::sync::LazyLock;

/// Host-like prefix: ASCII word characters or `-`, then at least one
/// `.label` group.
static BARE_HOST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)+").unwrap());

/// Existing `http://` or `https://` scheme, any case.
static HTTP_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Normalizes raw user input into the text that gets encoded.
///
/// # Rules
///
/// 1. Empty input stays empty (callers reject it before encoding)
/// 2. Input that starts like a host name and has no `http(s)://` scheme
///    gets `https://` prepended
/// 3. Anything else is returned unchanged, including free text and
///    strings that already carry a scheme, malformed or not
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_input("example.com"), "https://example.com");
/// assert_eq!(normalize_input("HTTP://x.com"), "HTTP://x.com");
/// assert_eq!(normalize_input("hello world"), "hello world");
/// ```
pub fn normalize_input(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    if BARE_HOST_REGEX.is_match(input) && !HTTP_SCHEME_REGEX.is_match(input) {
        return format!("https://{input}");
    }

    input.to_string()
}
