//! Human-readable progress lines.

use blogcast_error::FailureClass;
use blogcast_interface::{ProgressReporter, RunEvent, RunPhase};

/// Render `event` as a single status line.
pub fn status_line(event: &RunEvent) -> String {
    match event {
        RunEvent::Trying {
            index,
            total,
            candidate,
        } => format!("🤖 Trying model {}/{}: {}...", index + 1, total, candidate.label()),
        RunEvent::AgentReady(candidate) => {
            format!("✅ Agent initialized with {}", candidate.id())
        }
        RunEvent::Phase(RunPhase::Fetching) => "🔍 Scraping blog content...".to_string(),
        RunEvent::Phase(RunPhase::Summarizing) => "📝 Writing podcast summary...".to_string(),
        RunEvent::Phase(RunPhase::Synthesizing) => "🎙️ Generating audio...".to_string(),
        RunEvent::CandidateFailed {
            candidate,
            class: FailureClass::RateOrSizeLimit,
            ..
        } => format!("⚠️ {} hit its rate or size limit", candidate.id()),
        RunEvent::CandidateFailed {
            candidate, detail, ..
        } => format!("❌ Error with {}: {}", candidate.id(), detail),
        RunEvent::Succeeded(candidate) => {
            format!("✅ Successfully processed with {}", candidate.id())
        }
        RunEvent::Exhausted(_) => {
            "❌ All models exceeded their rate or size limits. Try again later or pick a shorter article."
                .to_string()
        }
        RunEvent::Fatal(_) => "🛑 Stopped trying models".to_string(),
        RunEvent::Saving => "💾 Saving audio...".to_string(),
        RunEvent::Saved(path) => format!("🎉 Podcast saved to {}", path),
    }
}

/// Prints each event to stdout as it happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn report(&self, event: &RunEvent) {
        tracing::debug!(event = %event, "Progress");
        println!("{}", status_line(event));
    }
}
