//! Error types for blogcast.
//!
//! Every concern in the workspace reports failures through the types in this
//! crate, so that the fallback orchestrator can reason about them without
//! inspecting provider-specific wording.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Failures coming out of a narration attempt are sorted into a
//! [`FailureClass`] through the [`ClassifyFailure`] trait.
//!
//! # Examples
//!
//! ```
//! use blogcast_error::{BlogcastResult, ClassifyFailure, FailureClass, ConfigError};
//!
//! fn load_keys() -> BlogcastResult<String> {
//!     Err(ConfigError::new("Please enter all required API keys"))?
//! }
//!
//! let err = load_keys().unwrap_err();
//! assert_eq!(err.failure_class(), FailureClass::Other);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod failure;
mod models;
mod narration;
mod speech;
mod storage;

pub use builder::BuilderError;
pub use config::ConfigError;
pub use error::{BlogcastError, BlogcastErrorKind, BlogcastResult};
pub use failure::{ClassifyFailure, FailureClass};
pub use models::{GroqErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
pub use narration::{NarrationError, NarrationErrorKind};
pub use speech::{SpeechError, SpeechErrorKind};
pub use storage::{StorageError, StorageErrorKind};
