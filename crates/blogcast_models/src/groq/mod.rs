//! Groq LPU inference backend.

mod driver;

pub use driver::{GroqDriver, GroqDriverFactory};
