//! Character-budget helpers.

/// Split `text` after at most `max_chars` Unicode scalar values.
///
/// Returns the kept prefix and whether anything was cut. Never splits a
/// multi-byte character.
///
/// # Examples
///
/// ```
/// use blogcast_core::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), ("hé", true));
/// assert_eq!(truncate_chars("hi", 10), ("hi", false));
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}
