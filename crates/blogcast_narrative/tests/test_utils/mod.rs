//! Test utilities for narration tests.
//!
//! Mock implementations of the backend seams with a shared call log so that
//! tests can assert on call order across collaborators.

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::{
    CallLog, MockDriverFactory, MockFetcher, MockResponse, MockSynthesizer, RecordingReporter,
};

use blogcast_core::{BackendCandidate, CandidateCatalog};

/// The bundled four-model catalog.
#[allow(dead_code)]
pub fn catalog() -> CandidateCatalog {
    CandidateCatalog::default()
}

/// Candidate list with `n` synthetic entries.
#[allow(dead_code)]
pub fn candidates(n: usize) -> Vec<BackendCandidate> {
    (0..n)
        .map(|i| BackendCandidate::new(format!("model-{}", i), format!("Model {}", i)))
        .collect()
}
