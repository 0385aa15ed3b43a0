//! String normalization utilities.

/// Normalizes a classification tag: trims surrounding whitespace and
/// uppercases the remainder, substituting `fallback` when the input is blank.
///
/// Element and AI-behavior tags are stored uppercase so that comparisons
/// never depend on caller formatting.
///
/// # Examples
///
/// ```
/// use bestiary_domain::common::normalize_tag;
///
/// assert_eq!(normalize_tag("fire", "NONE"), "FIRE");
/// assert_eq!(normalize_tag("  Shadow  ", "NONE"), "SHADOW");
/// assert_eq!(normalize_tag("", "NONE"), "NONE");
/// assert_eq!(normalize_tag("   ", "NONE"), "NONE");
/// ```
pub fn normalize_tag(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

/// Returns `true` if the string is empty or contains only whitespace.
///
/// # Examples
///
/// ```
/// use bestiary_domain::common::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   "));
/// assert!(!is_blank("goblin"));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
