use scrivener_core::{CompletionRequest, Role};
use scrivener_error::{CompletionErrorKind, ScrivenerErrorKind};
use scrivener_models::{ChatResponse, from_chat_response, to_chat_request};

fn parse(body: &str) -> ChatResponse {
    serde_json::from_str(body).expect("valid test JSON")
}

fn completion_kind(body: &str) -> CompletionErrorKind {
    let err = from_chat_response(&parse(body), 200).expect_err("expected failure");
    match err.kind() {
        ScrivenerErrorKind::Completion(e) => e.kind.clone(),
        other => panic!("expected completion error, got {other}"),
    }
}

#[test]
fn test_request_uses_default_model_and_lowercase_roles() {
    let request = CompletionRequest::chat("system text", "user text", 0.4, 128);
    let chat = to_chat_request(&request, "test-model").expect("request converts");

    assert_eq!(chat.model(), "test-model");
    assert_eq!(*chat.max_tokens(), 128);
    assert!(!*chat.stream());

    let json = serde_json::to_value(&chat).expect("serializes");
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][0]["content"], "system text");
    assert_eq!(json["messages"][1]["role"], "user");
    assert_eq!(json["messages"][1]["content"], "user text");
}

#[test]
fn test_request_model_override_wins() {
    let request = CompletionRequest::builder()
        .messages(vec![scrivener_core::Message::new(Role::User, "hi")])
        .temperature(0.1)
        .max_tokens(8u32)
        .model("override-model")
        .build()
        .expect("builder has every field");

    let chat = to_chat_request(&request, "default-model").expect("request converts");
    assert_eq!(chat.model(), "override-model");
}

#[test]
fn test_first_choice_text_is_returned_verbatim() {
    let body = r#"{
        "id": "cmpl-1",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "  exact text\n"}, "finish_reason": "stop"},
            {"index": 1, "message": {"role": "assistant", "content": "other"}}
        ]
    }"#;

    let response = from_chat_response(&parse(body), 200).expect("valid response");
    assert_eq!(response.first_text(), Some("  exact text\n"));
    assert_eq!(response.choices().len(), 2);
    assert_eq!(response.choices()[0].finish_reason().as_deref(), Some("stop"));
}

#[test]
fn test_missing_choices_is_unexpected_response() {
    assert!(matches!(
        completion_kind(r#"{"id": "cmpl-1"}"#),
        CompletionErrorKind::UnexpectedResponse(_)
    ));
}

#[test]
fn test_empty_choices_is_unexpected_response() {
    assert!(matches!(
        completion_kind(r#"{"choices": []}"#),
        CompletionErrorKind::UnexpectedResponse(_)
    ));
}

#[test]
fn test_choice_without_content_is_unexpected_response() {
    assert!(matches!(
        completion_kind(r#"{"choices": [{"index": 0, "message": {"role": "assistant"}}]}"#),
        CompletionErrorKind::UnexpectedResponse(_)
    ));
}

#[test]
fn test_embedded_error_object_is_api_error() {
    let kind = completion_kind(r#"{"error": {"message": "model is overloaded"}}"#);
    assert_eq!(
        kind,
        CompletionErrorKind::Api {
            status: 200,
            message: "model is overloaded".to_string()
        }
    );
}
