//! Text patterns shared by the builders.

use std::sync::LazyLock;

use regex::Regex;

/// Scheme prefix for files uploaded with the same request.
pub const ATTACHMENT_SCHEME: &str = "attachment://";

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)https?://(?:www\.)?[a-z0-9][a-z0-9-]+[a-z0-9]\.\S{2,}",
        r"|www\.[a-z0-9][a-z0-9-]+[a-z0-9]\.\S{2,}",
        r"|https?://(?:www\.)?[a-z0-9]+\.\S{2,}",
        r"|www\.[a-z0-9]+\.\S{2,}",
    ))
    .expect("URL pattern is valid")
});

static HEX_COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([a-fA-F0-9]{6})$").expect("hex pattern is valid"));

/// Returns true if `value` contains an `http(s)://` or `www.` URL with a
/// dotted host.
///
/// The check is a substring search, not a full parse: `"see https://a.io"`
/// passes.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

/// Returns true for an `attachment://` reference or a URL accepted by
/// [`is_valid_url`].
pub(crate) fn is_valid_media_url(value: &str) -> bool {
    value.starts_with(ATTACHMENT_SCHEME) || is_valid_url(value)
}

/// Extracts the six hex digits from `#RRGGBB` or `RRGGBB`.
pub(crate) fn hex_digits(value: &str) -> Option<&str> {
    HEX_COLOR_PATTERN
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Number of characters in `value`, as counted for the API length limits.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
