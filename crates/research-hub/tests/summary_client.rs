//! Summary client tests against a mocked chat-completion endpoint.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_hub::catalog::{self, Catalog};
use research_hub::client::SummaryClient;
use research_hub::config::Config;
use research_hub::error::{ClientError, SummaryError};
use research_hub::models::SummaryResult;

fn client_for(server: &MockServer) -> SummaryClient {
    SummaryClient::new(Config::for_testing(&server.uri())).unwrap()
}

/// Completion envelope whose message content is `content`.
fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

fn payload() -> String {
    json!({
        "summary": "Transformers replace recurrence with attention.",
        "key_points": ["Self-attention only", "Parallel training"],
        "important_diagram_descriptions": [
            {
                "title": "Multi-Head Attention",
                "description": "Parallel attention heads",
                "importance": "Core mechanism"
            },
            {
                "title": "Training Curves",
                "description": "Loss over time",
                "importance": "Shows convergence"
            }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_summary_success_resolves_diagrams() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "max_tokens": 1000,
            "response_format": {"type": "json_schema", "json_schema": {"name": "paper_summary_response"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&payload())))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = Catalog::mock();
    let paper = catalog.find(catalog::SHOWCASE_ID).unwrap();
    let diagrams = catalog.diagrams_for(catalog::SHOWCASE_ID);

    let result = client_for(&server).generate_summary(paper, diagrams).await.unwrap();

    assert_eq!(result.summary, "Transformers replace recurrence with attention.");
    assert_eq!(result.key_points, vec!["Self-attention only", "Parallel training"]);
    assert_eq!(result.diagrams.len(), 2);

    // Title containment picks the attention figure.
    assert_eq!(result.diagrams[0].kind, "Mechanism");
    assert_eq!(result.diagrams[0].image_url, diagrams[1].image_url);

    // No title match: position 1 falls back to diagrams[1 % 3].
    assert_eq!(result.diagrams[1].kind, diagrams[1].kind);
    assert_eq!(result.diagrams[1].importance, "Shows convergence");
}

#[tokio::test]
async fn test_summary_without_local_diagrams() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&payload())))
        .mount(&server)
        .await;

    let paper = catalog::comparison_papers().remove(0);
    let result = client_for(&server).generate_summary(&paper, &[]).await.unwrap();

    assert!(result.diagrams.iter().all(|d| d.image_url.is_empty() && d.kind == "Figure"));
}

#[tokio::test]
async fn test_server_error_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let paper = catalog::showcase_paper();

    let err = client.generate_summary(&paper, &[]).await.unwrap_err();
    assert!(matches!(err, SummaryError::NetworkFailure(ClientError::Server { status: 500, .. })));
    assert_eq!(err.kind(), "network_failure");

    let result = client.summarize_or_fallback(&paper, &[]).await;
    assert_eq!(result, SummaryResult::fallback());
}

#[tokio::test]
async fn test_unauthorized_is_network_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_summary(&catalog::showcase_paper(), &[])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SummaryError::NetworkFailure(ClientError::Unauthorized { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_rate_limit_reads_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "12"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_summary(&catalog::showcase_paper(), &[])
        .await
        .unwrap_err();
    let SummaryError::NetworkFailure(client_err) = err else {
        panic!("expected network failure, got {err:?}");
    };
    assert!(matches!(
        client_err,
        ClientError::RateLimited { retry_after } if retry_after == Duration::from_secs(12)
    ));
    assert_eq!(client_err.status(), Some(429));
}

#[tokio::test]
async fn test_non_json_content_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion("Here is your summary: great paper")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let paper = catalog::showcase_paper();

    let err = client.generate_summary(&paper, &[]).await.unwrap_err();
    assert!(matches!(err, SummaryError::MalformedResponse(_)));
    assert_eq!(err.kind(), "malformed_response");

    assert_eq!(client.summarize_or_fallback(&paper, &[]).await, SummaryResult::fallback());
}

#[tokio::test]
async fn test_missing_required_field_is_malformed() {
    let server = MockServer::start().await;
    let content = json!({"summary": "only a summary"}).to_string();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&content)))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_summary(&catalog::showcase_paper(), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, SummaryError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_missing_choices_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_summary(&catalog::showcase_paper(), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, SummaryError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_failure() {
    // Nothing listens on port 9 of localhost.
    let client = SummaryClient::new(Config::for_testing("http://127.0.0.1:9")).unwrap();

    let err = client.generate_summary(&catalog::showcase_paper(), &[]).await.unwrap_err();
    assert!(matches!(err, SummaryError::NetworkFailure(_)));
}
