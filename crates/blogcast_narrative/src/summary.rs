//! Summary length budget.

use blogcast_core::truncate_chars;
use tracing::debug;

/// Trim `text` and cut it to at most `max_chars` characters.
///
/// When a cut is needed it lands on the last whitespace inside the budget,
/// so words are not split, unless that would discard more than half of it.
///
/// ```
/// use blogcast_narrative::fit_to_budget;
///
/// assert_eq!(fit_to_budget("  short  ", 100), "short");
/// assert_eq!(fit_to_budget("hello wonderful world", 17), "hello wonderful");
/// ```
pub fn fit_to_budget(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    let (kept, cut) = truncate_chars(trimmed, max_chars);
    if !cut {
        return kept.to_string();
    }

    let at_word = match kept.rfind(char::is_whitespace) {
        Some(idx) if kept[..idx].chars().count() * 2 >= max_chars => &kept[..idx],
        _ => kept,
    };

    let fitted = at_word.trim_end().to_string();
    debug!(
        original_chars = trimmed.chars().count(),
        fitted_chars = fitted.chars().count(),
        max_chars,
        "Summary cut to budget"
    );
    fitted
}
