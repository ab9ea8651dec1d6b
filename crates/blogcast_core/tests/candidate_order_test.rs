//! Tests for candidate ordering.

use blogcast_core::{BackendCandidate, CandidateCatalog};

fn ids(candidates: &[BackendCandidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.id().as_str()).collect()
}

#[test]
fn test_selected_candidate_always_first() {
    let catalog = CandidateCatalog::default();

    for candidate in catalog.candidates() {
        let order = catalog.ordered_for(candidate.id(), true).unwrap();
        assert_eq!(order[0].id(), candidate.id());
        assert_eq!(order.len(), catalog.len());
    }
}

#[test]
fn test_remaining_candidates_keep_relative_order() {
    let catalog = CandidateCatalog::default();
    let order = catalog.ordered_for("openai/gpt-oss-120b", true).unwrap();

    assert_eq!(
        ids(&order),
        vec![
            "openai/gpt-oss-120b",
            "llama-3.3-70b-versatile",
            "llama-3.1-8b-instant",
            "openai/gpt-oss-20b",
        ]
    );
}

#[test]
fn test_each_candidate_appears_once() {
    let catalog = CandidateCatalog::default();
    let order = catalog.ordered_for("openai/gpt-oss-20b", true).unwrap();

    let mut seen = std::collections::HashSet::new();
    for candidate in &order {
        assert!(seen.insert(candidate.id().clone()), "duplicate {}", candidate);
    }
}

#[test]
fn test_fallback_disabled_is_singleton() {
    let catalog = CandidateCatalog::default();
    let order = catalog.ordered_for("llama-3.1-8b-instant", false).unwrap();
    assert_eq!(ids(&order), vec!["llama-3.1-8b-instant"]);
}

#[test]
fn test_unknown_selection_is_config_error() {
    let catalog = CandidateCatalog::default();
    let err = catalog.ordered_for("gpt-9", true).unwrap_err();
    assert!(format!("{}", err).contains("Unknown model 'gpt-9'"));
}

#[test]
fn test_repeated_ids_tried_once() {
    let catalog = CandidateCatalog::new(vec![
        BackendCandidate::new("a", "A"),
        BackendCandidate::new("b", "B"),
        BackendCandidate::new("b", "B again"),
        BackendCandidate::new("a", "A again"),
    ]);

    assert_eq!(catalog.first_duplicate(), Some("b"));
    let order = catalog.ordered_for("a", true).unwrap();
    assert_eq!(ids(&order), vec!["a", "b"]);
    assert_eq!(order[1].label(), "B");
}
