//! OpenAI chat-completions adapter using strict JSON-schema structured output.

use super::error::{EnrichmentUnavailable, UnavailableKind};
use super::prompt::build_prompt;
use super::{EnrichmentClient, EnrichmentRequest, EnrichmentResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

const SCHEMA_NAME: &str = "carbon_footprint_assessment";

/// Longest slice of an error body copied into failure details.
const MAX_ERROR_EXCERPT: usize = 200;

#[derive(Debug, Clone)]
pub struct OpenAiEnrichmentClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OpenAiEnrichmentClient {
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, EnrichmentUnavailable> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
            EnrichmentUnavailable::new(UnavailableKind::NotConfigured, "invalid API key format")
        })?;
        headers.insert(AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| {
                EnrichmentUnavailable::new(
                    UnavailableKind::NotConfigured,
                    format!("failed to build HTTP client: {err}"),
                )
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Serialize)]
struct ChatApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 1],
    response_format: Value,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

/// The `response_format` block pinning output to `{ impact, recommendations }`.
pub(crate) fn response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": SCHEMA_NAME,
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "impact": { "type": "string" },
                    "recommendations": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                },
                "required": ["impact", "recommendations"],
                "additionalProperties": false
            }
        }
    })
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_EXCERPT) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// Parses the assistant message content against the two-field shape.
pub(crate) fn parse_assessment(content: &str) -> Result<EnrichmentResult, EnrichmentUnavailable> {
    let parsed: EnrichmentResult = serde_json::from_str(content).map_err(|err| {
        let kind = if err.is_data() {
            UnavailableKind::Schema
        } else {
            UnavailableKind::Malformed
        };
        EnrichmentUnavailable::new(kind, format!("assessment content: {err}"))
    })?;
    parsed.validated()
}

#[async_trait]
impl EnrichmentClient for OpenAiEnrichmentClient {
    async fn enrich(
        &self,
        request: &EnrichmentRequest<'_>,
    ) -> Result<EnrichmentResult, EnrichmentUnavailable> {
        let prompt = build_prompt(request);
        let api_request = ChatApiRequest {
            model: &self.model,
            messages: [ApiMessage {
                role: "user",
                content: &prompt,
            }],
            response_format: response_format(),
        };

        debug!(model = %self.model, score = %request.score, locale = %request.locale, "requesting enrichment");

        let response = self
            .client
            .post(self.chat_url())
            .json(&api_request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(EnrichmentUnavailable::new(
                UnavailableKind::Status,
                format!("HTTP {}: {}", status.as_u16(), excerpt(&body)),
            ));
        }

        let parsed: ChatApiResponse = serde_json::from_str(&body).map_err(|err| {
            EnrichmentUnavailable::new(UnavailableKind::Malformed, format!("response body: {err}"))
        })?;

        let message = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| {
                EnrichmentUnavailable::new(UnavailableKind::Malformed, "no choices in response")
            })?;

        if let Some(refusal) = message.refusal.filter(|text| !text.trim().is_empty()) {
            return Err(EnrichmentUnavailable::new(
                UnavailableKind::Refused,
                excerpt(&refusal),
            ));
        }

        let content = message
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                EnrichmentUnavailable::new(UnavailableKind::Malformed, "empty message content")
            })?;

        parse_assessment(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assessment_accepts_schema_shaped_content() {
        let parsed = parse_assessment(
            r#"{"impact":"Not bad 🌍","recommendations":["🚌 Bus it","🥦 Go veggie","🔌 Unplug"]}"#,
        )
        .expect("valid content");
        assert_eq!(parsed.recommendations.len(), 3);
    }

    #[test]
    fn parse_assessment_classifies_failures() {
        let err = parse_assessment("not json").expect_err("malformed");
        assert_eq!(err.kind, UnavailableKind::Malformed);

        let err = parse_assessment(r#"{"impact":"x"}"#).expect_err("missing field");
        assert_eq!(err.kind, UnavailableKind::Schema);

        let err = parse_assessment(r#"{"impact":"x","recommendations":["a"],"extra":1}"#)
            .expect_err("unknown field");
        assert_eq!(err.kind, UnavailableKind::Schema);

        let err = parse_assessment(r#"{"impact":"x","recommendations":"a"}"#)
            .expect_err("wrong type");
        assert_eq!(err.kind, UnavailableKind::Schema);
    }

    #[test]
    fn response_format_is_strict_two_field_schema() {
        let format = response_format();
        assert_eq!(format["type"], "json_schema");
        assert_eq!(format["json_schema"]["strict"], true);
        assert_eq!(
            format["json_schema"]["schema"]["required"],
            json!(["impact", "recommendations"])
        );
        assert_eq!(format["json_schema"]["schema"]["additionalProperties"], false);
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let long = "x".repeat(MAX_ERROR_EXCERPT + 50);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.len(), MAX_ERROR_EXCERPT + 3);
    }
}
