//! Generic client for OpenAI-compatible chat completions APIs.

mod client;
mod dto;
mod error;

pub use client::OpenAICompatibleClient;
pub use dto::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use error::OpenAICompatError;
