//! Tests for completion requests.

use scrivener_core::{CompletionRequest, Message, Role};
use scrivener_error::{BuilderError, BuilderErrorKind};

#[test]
fn test_chat_puts_system_first() {
    let request = CompletionRequest::chat("Be brief.", "Hello", 0.3, 100);

    let roles: Vec<_> = request.messages().iter().map(|m| *m.role()).collect();
    assert_eq!(roles, vec![Role::System, Role::User]);
    assert_eq!(request.messages()[1].content(), "Hello");
    assert!(request.model().is_none());
}

#[test]
fn test_builder_reports_missing_field() {
    let err: BuilderError = CompletionRequest::builder()
        .messages(vec![Message::user("Hi")])
        .temperature(0.5)
        .build()
        .unwrap_err()
        .into();

    assert_eq!(
        *err.kind(),
        BuilderErrorKind::MissingField("max_tokens".to_string())
    );
}
