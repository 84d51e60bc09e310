//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
///
/// Displays in the lowercase form chat-completion endpoints expect.
///
/// # Examples
///
/// ```
/// use scrivener_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::System), "system");
/// assert_eq!(Role::Assistant.to_string(), "assistant");
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
    /// Fixed instruction that frames every request
    #[display("system")]
    System,
    /// The rendered prompt
    #[display("user")]
    User,
    /// Text produced by the model
    #[display("assistant")]
    Assistant,
}
