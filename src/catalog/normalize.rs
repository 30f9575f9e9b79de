//! Accent- and case-insensitive name matching.

use unicode_normalization::UnicodeNormalization;

/// Normalizes a name for lookup.
///
/// Decomposes to NFD, drops every non-ASCII scalar (which removes combining
/// accents), lowercases and trims.
///
/// # Examples
///
/// ```
/// use geo_route::catalog::normalize_name;
///
/// assert_eq!(normalize_name("  Bogotá "), "bogota");
/// assert_eq!(normalize_name("ASUNCIÓN"), "asuncion");
/// ```
pub fn normalize_name(text: &str) -> String {
    text.nfd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Splits a comma-separated selection into trimmed, non-empty names.
pub fn parse_selection(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}
