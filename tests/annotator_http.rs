//! HTTP annotator against a mock chat-completions server.

use httpmock::prelude::*;
use serde_json::json;

use repunct::{AnnotateError, Annotator, AnnotatorSettings, HttpAnnotator};

fn annotator_for(server: &MockServer) -> HttpAnnotator {
    HttpAnnotator::new(AnnotatorSettings {
        endpoint: server.url("/chat/completions"),
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn returns_trimmed_completion_content() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer test-key")
                .body_contains("保持原文语义不变")
                .body_contains("天地玄黄宇宙洪荒");
            then.status(200).json_body(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "  天地玄黄，宇宙洪荒。 "}}
                ]
            }));
        })
        .await;

    let annotator = annotator_for(&server);
    let annotated = annotator.annotate("天地玄黄宇宙洪荒").await.unwrap();
    assert_eq!(annotated, "天地玄黄，宇宙洪荒。");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_maps_to_retryable_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(503).body("overloaded");
        })
        .await;

    let annotator = annotator_for(&server);
    let error = annotator.annotate("text").await.unwrap_err();
    match &error {
        AnnotateError::Service { status, message } => {
            assert_eq!(*status, 503);
            assert_eq!(message, "overloaded");
        }
        other => panic!("expected service error, got {other:?}"),
    }
    assert!(repunct::pipeline::Retryable::is_retryable(&error));
}

#[tokio::test]
async fn empty_choices_map_to_non_retryable_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let annotator = annotator_for(&server);
    let error = annotator.annotate("text").await.unwrap_err();
    assert!(matches!(error, AnnotateError::EmptyCompletion));
    assert!(!repunct::pipeline::Retryable::is_retryable(&error));
}

#[tokio::test]
async fn whitespace_only_content_is_treated_as_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": "   "}}]
            }));
        })
        .await;

    let annotator = annotator_for(&server);
    let error = annotator.annotate("text").await.unwrap_err();
    assert!(matches!(error, AnnotateError::EmptyCompletion));
}
