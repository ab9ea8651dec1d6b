//! Text-generation backends for blogcast.
//!
//! The only provider is Groq, reached through a generic OpenAI-compatible
//! chat completions client. Provider failures are translated into typed
//! [`GroqErrorKind`](blogcast_error::GroqErrorKind) variants so that the
//! fallback orchestrator can tell quota and size limits apart from
//! everything else.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod groq;
mod metrics;
mod openai_compat;

pub use groq::{GroqDriver, GroqDriverFactory};
pub use metrics::LlmMetrics;
pub use openai_compat::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OpenAICompatError,
    OpenAICompatibleClient,
};
