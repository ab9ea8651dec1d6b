//! Conversation messages sent to text-generation backends.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Role of a message author.
///
/// # Examples
///
/// ```
/// use blogcast_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "system");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the conversation
    #[display("system")]
    System,
    /// Content supplied on behalf of the user
    #[display("user")]
    User,
    /// Model output
    #[display("assistant")]
    Assistant,
}

/// A single text message.
///
/// # Examples
///
/// ```
/// use blogcast_core::{Message, Role};
///
/// let message = Message::builder()
///     .role(Role::User)
///     .content("Summarize this")
///     .build()
///     .unwrap();
///
/// assert_eq!(*message.role(), Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct Message {
    /// Author role
    role: Role,
    /// Message text
    content: String,
}

impl Message {
    /// Creates a new builder for `Message`.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Shorthand for a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Shorthand for a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
