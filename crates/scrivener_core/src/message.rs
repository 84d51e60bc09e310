//! Chat message type.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A role-tagged text message.
///
/// # Examples
///
/// ```
/// use scrivener_core::{Message, Role};
///
/// let message = Message::user("Review this function");
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Review this function");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// Text content
    content: String,
}

impl Message {
    /// Creates a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system instruction message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Creates a user prompt message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
