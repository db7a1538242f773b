//! Behavior of the OpenAI enrichment client against a mocked chat-completions
//! endpoint, and of the quiz service when that endpoint misbehaves.

use std::sync::Arc;

use carbon_footprint::enrichment::{
    EnrichmentClient, EnrichmentRequest, OpenAiEnrichmentClient, UnavailableKind,
};
use carbon_footprint::quiz::{fallback, AnswerSet, FootprintService, Locale, ResultSource};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn high_answers() -> AnswerSet {
    AnswerSet::from_ordered(["never", "car", "daily", "none", "weekly"]).expect("answers")
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content, "refusal": null },
            "finish_reason": "stop"
        }]
    })
}

fn client(server: &MockServer) -> OpenAiEnrichmentClient {
    OpenAiEnrichmentClient::new("sk-test", server.uri(), "gpt-test").expect("client builds")
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn sends_structured_request_and_parses_assessment() {
    let server = MockServer::start().await;
    let content = r#"{"impact":"Your footprint is giving main-character energy 🚗🔥","recommendations":["🚌 Take the bus twice a week","🥗 Go meatless on Mondays","💡 Switch to LED bulbs"]}"#;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-test",
            "response_format": {
                "type": "json_schema",
                "json_schema": { "name": "carbon_footprint_assessment", "strict": true }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
        .expect(1)
        .mount(&server)
        .await;

    let answers = high_answers();
    let request = EnrichmentRequest {
        score: carbon_footprint::quiz::NormalizedScore::from_raw_points(15),
        answers: &answers,
        locale: Locale::Id,
    };

    let result = client(&server).enrich(&request).await.expect("enriched");
    assert_eq!(
        result.impact,
        "Your footprint is giving main-character energy 🚗🔥"
    );
    assert_eq!(result.recommendations.len(), 3);

    let received = server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value = received[0].body_json().expect("json body");
    let prompt = body["messages"][0]["content"].as_str().expect("prompt");
    assert_eq!(body["messages"][0]["role"], "user");
    assert!(prompt.contains("Overall score: 100/100"));
    assert!(prompt.contains("Respond in Indonesian language"));
}

#[tokio::test]
async fn non_success_status_is_unavailable() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({
            "error": { "message": "upstream exploded", "type": "server_error" }
        })),
    )
    .await;

    let answers = high_answers();
    let request = EnrichmentRequest {
        score: carbon_footprint::quiz::NormalizedScore::from_raw_points(15),
        answers: &answers,
        locale: Locale::En,
    };

    let err = client(&server).enrich(&request).await.expect_err("500");
    assert_eq!(err.kind, UnavailableKind::Status);
    assert!(err.detail.contains("HTTP 500"));
}

#[tokio::test]
async fn malformed_body_and_schema_mismatch_are_unavailable() {
    let answers = high_answers();
    let request = EnrichmentRequest {
        score: carbon_footprint::quiz::NormalizedScore::from_raw_points(15),
        answers: &answers,
        locale: Locale::En,
    };

    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
    let err = client(&server).enrich(&request).await.expect_err("not json");
    assert_eq!(err.kind, UnavailableKind::Malformed);

    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(completion(r#"{"impact":"ok","tips":["a"]}"#)),
    )
    .await;
    let err = client(&server).enrich(&request).await.expect_err("wrong shape");
    assert_eq!(err.kind, UnavailableKind::Schema);

    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(json!({ "choices": [] }))).await;
    let err = client(&server).enrich(&request).await.expect_err("no choices");
    assert_eq!(err.kind, UnavailableKind::Malformed);
}

#[tokio::test]
async fn refusal_is_unavailable() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "role": "assistant", "content": null, "refusal": "I can't help with that." }
            }]
        })),
    )
    .await;

    let answers = high_answers();
    let request = EnrichmentRequest {
        score: carbon_footprint::quiz::NormalizedScore::from_raw_points(15),
        answers: &answers,
        locale: Locale::En,
    };
    let err = client(&server).enrich(&request).await.expect_err("refused");
    assert_eq!(err.kind, UnavailableKind::Refused);
}

#[tokio::test]
async fn unreachable_endpoint_is_unavailable() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let answers = high_answers();
    let request = EnrichmentRequest {
        score: carbon_footprint::quiz::NormalizedScore::from_raw_points(15),
        answers: &answers,
        locale: Locale::En,
    };
    let client = OpenAiEnrichmentClient::new("sk-test", uri, "gpt-test").expect("client builds");
    let err = client.enrich(&request).await.expect_err("connection refused");
    assert_eq!(err.kind, UnavailableKind::Transport);
}

#[tokio::test]
async fn service_falls_back_to_static_content_when_endpoint_fails() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(429)).await;

    let service = FootprintService::new(Arc::new(client(&server)));
    let result = service
        .calculate(&high_answers(), Locale::En)
        .await
        .expect("scores");

    assert_eq!(result.score().value(), 100);
    assert_eq!(result.source(), ResultSource::Fallback);
    let expected = fallback::resolve(result.score(), Locale::En);
    assert_eq!(result.impact(), expected.impact);
    assert_eq!(result.recommendations(), expected.recommendations.as_slice());
    assert_eq!(result.recommendations().len(), 4);
}

#[tokio::test]
async fn service_passes_generated_content_through_verbatim() {
    let server = MockServer::start().await;
    let content = r#"{"impact":"Low-key eco legend 🌿✨","recommendations":["🌞 Add rooftop solar","📣 Bring friends along","🧺 Keep thrifting","🚰 Refill, don't rebuy"]}"#;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(completion(content)),
    )
    .await;

    let service = FootprintService::new(Arc::new(client(&server)));
    let answers =
        AnswerSet::from_ordered(["always", "walking", "never", "minimal", "rarely"]).expect("set");
    let result = service.calculate(&answers, Locale::En).await.expect("scores");

    assert_eq!(result.score().value(), 0);
    assert_eq!(result.source(), ResultSource::Generated);
    assert_eq!(result.impact(), "Low-key eco legend 🌿✨");
    assert_eq!(result.recommendations()[3], "🚰 Refill, don't rebuy");
    assert_eq!(
        result.summary(),
        "Based on your answers, your carbon footprint score is 0 out of 100."
    );
}
