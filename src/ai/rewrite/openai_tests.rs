//! Unit tests for the OpenAI-compatible rewrite adapter.
//!
//! HTTP round-trips run against a wiremock server. The mock server is
//! started on a manually created tokio runtime so the blocking client can
//! be exercised from the test thread.

use std::time::Duration;

use rstest::rstest;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::ai::rewrite::{RewriteRequest, RewriteService};
use crate::error::GlossError;

use super::{ChatContent, OpenAiRewriteConfig, OpenAiRewriteService, parse_content_value};
use rewrite_request_fixture::rewrite_request;

mod rewrite_request_fixture;

fn test_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().expect("tokio runtime should start")
}

fn service_for(base_url: &str) -> OpenAiRewriteService {
    let config = OpenAiRewriteConfig::new(
        base_url,
        "gpt-4o",
        Some("test-key".to_owned()),
        Duration::from_secs(5),
    );
    OpenAiRewriteService::from_config(config).expect("client should build")
}

#[test]
fn parse_content_value_supports_string_and_array() {
    let as_string: ChatContent =
        serde_json::from_value(serde_json::json!("hello")).expect("string content should decode");
    let as_array: ChatContent =
        serde_json::from_value(serde_json::json!([{"text":"first"}, {"text":"second"}]))
            .expect("array content should decode");

    assert_eq!(parse_content_value(&as_string), Some("hello"));
    assert_eq!(parse_content_value(&as_array), Some("first"));
}

#[rstest]
fn rewrite_text_requires_api_key(rewrite_request: RewriteRequest) {
    let service = OpenAiRewriteService::from_config(OpenAiRewriteConfig::default())
        .expect("client should build");
    let error = service
        .rewrite_text(&rewrite_request)
        .expect_err("missing key should be rejected");

    assert_eq!(error, GlossError::MissingApiKey);
}

#[rstest]
fn rewrite_text_returns_completion_verbatim(rewrite_request: RewriteRequest) {
    let runtime = test_runtime();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({"model": "gpt-4o"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "  /// polished\n"}}]
            })))
            .mount(&server)
            .await;
        server
    });

    let service = service_for(&server.uri());
    let replacement = service
        .rewrite_text(&rewrite_request)
        .expect("rewrite should succeed");

    // Whitespace is preserved: completions are spliced back verbatim.
    assert_eq!(replacement, "  /// polished\n");
}

#[rstest]
fn rewrite_text_maps_error_status_to_api_error(rewrite_request: RewriteRequest) {
    let runtime = test_runtime();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        server
    });

    let service = service_for(&server.uri());
    let error = service
        .rewrite_text(&rewrite_request)
        .expect_err("error status should be rejected");

    assert!(
        matches!(&error, GlossError::Api { message } if message.contains("status 500")),
        "expected Api error carrying the status, got {error:?}"
    );
}

#[rstest]
fn rewrite_text_errors_when_no_choice_is_present(rewrite_request: RewriteRequest) {
    let runtime = test_runtime();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;
        server
    });

    let service = service_for(&server.uri());
    let error = service
        .rewrite_text(&rewrite_request)
        .expect_err("choice-less response should be rejected");

    assert!(
        matches!(&error, GlossError::Api { message } if message.contains("assistant text")),
        "expected Api error, got {error:?}"
    );
}

#[rstest]
fn rewrite_text_maps_transport_failure_to_network_error(rewrite_request: RewriteRequest) {
    let service = service_for("http://127.0.0.1:1");
    let error = service
        .rewrite_text(&rewrite_request)
        .expect_err("unreachable endpoint should fail");

    assert!(
        matches!(error, GlossError::Network { .. }),
        "expected Network error for transport failure"
    );
}
