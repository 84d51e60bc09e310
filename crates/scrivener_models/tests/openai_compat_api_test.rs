//! Live endpoint tests. Run with `--features api` and a key in the environment.

#![cfg(feature = "api")]

use scrivener_config::ScrivenerConfig;
use scrivener_interface::CompletionDriver;
use scrivener_models::OpenAICompatibleClient;

#[tokio::test]
async fn test_live_completion_returns_text() {
    let _ = dotenvy::dotenv();
    let config = ScrivenerConfig::load().expect("configuration loads");
    let client = OpenAICompatibleClient::from_config(config.client()).expect("client builds");

    let text = client
        .complete("Answer with a single word.", "What color is the sky?", 0.0, 8)
        .await
        .expect("live call succeeds");

    assert!(!text.trim().is_empty());
}

#[tokio::test]
async fn test_invalid_key_is_api_error() {
    let config = ScrivenerConfig::bundled().expect("bundled configuration parses");
    let client = OpenAICompatibleClient::new(
        "invalid-key",
        config.client().model(),
        config.client().base_url(),
    )
    .expect("client builds");

    let err = client
        .complete("system", "hello", 0.0, 4)
        .await
        .expect_err("bad credentials are rejected");
    assert!(err.is_completion());
}
