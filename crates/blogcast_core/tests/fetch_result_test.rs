//! Tests for fetch results and character truncation.

use blogcast_core::{FetchResult, truncate_chars};

#[test]
fn test_error_prefix() {
    let err = FetchResult::error("No content found in response");
    assert!(err.is_error());
    assert!(err.as_str().starts_with("Error:"));

    let ok = FetchResult::content("# Title");
    assert!(!ok.is_error());
    assert_eq!(ok.char_len(), 7);
}

#[test]
fn test_truncate_counts_characters_not_bytes() {
    let text = "ü".repeat(10);
    let (kept, cut) = truncate_chars(&text, 4);
    assert!(cut);
    assert_eq!(kept.chars().count(), 4);
    assert_eq!(kept.len(), 8);
}

#[test]
fn test_truncate_exact_length_is_not_cut() {
    let text = "a".repeat(4000);
    let (kept, cut) = truncate_chars(&text, 4000);
    assert!(!cut);
    assert_eq!(kept.len(), 4000);
}
