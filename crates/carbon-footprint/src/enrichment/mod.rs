//! Natural-language impact text and recommendations for a scored quiz.
//!
//! An [`EnrichmentClient`] makes a single attempt per quiz completion. Every
//! failure collapses into [`EnrichmentUnavailable`]; the quiz service answers
//! that with the static fallback tables.

mod error;
mod openai;
mod prompt;

pub use error::{EnrichmentUnavailable, UnavailableKind};
pub use openai::OpenAiEnrichmentClient;
pub use prompt::build_prompt;

use crate::config::EnrichmentConfig;
use crate::quiz::locale::Locale;
use crate::quiz::scoring::{AnswerSet, NormalizedScore};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct EnrichmentRequest<'a> {
    pub score: NormalizedScore,
    pub answers: &'a AnswerSet,
    pub locale: Locale,
}

/// Impact statement plus ordered recommendations, whichever source produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrichmentResult {
    pub impact: String,
    pub recommendations: Vec<String>,
}

/// Upper bound on generated recommendations; the prompt asks for three or four.
pub const MAX_RECOMMENDATIONS: usize = 4;

impl EnrichmentResult {
    /// Rejects blank impact text, blank recommendations, and lists that are
    /// empty or longer than [`MAX_RECOMMENDATIONS`]. Short lists are accepted.
    pub fn validated(self) -> Result<Self, EnrichmentUnavailable> {
        if self.impact.trim().is_empty() {
            return Err(EnrichmentUnavailable::schema("impact is empty"));
        }
        if self.recommendations.is_empty() {
            return Err(EnrichmentUnavailable::schema("recommendations are empty"));
        }
        if self.recommendations.len() > MAX_RECOMMENDATIONS {
            return Err(EnrichmentUnavailable::schema(format!(
                "{} recommendations returned, at most {MAX_RECOMMENDATIONS} allowed",
                self.recommendations.len()
            )));
        }
        if let Some(position) = self
            .recommendations
            .iter()
            .position(|item| item.trim().is_empty())
        {
            return Err(EnrichmentUnavailable::schema(format!(
                "recommendation {position} is empty"
            )));
        }
        Ok(self)
    }
}

#[async_trait]
pub trait EnrichmentClient: Send + Sync {
    async fn enrich(
        &self,
        request: &EnrichmentRequest<'_>,
    ) -> Result<EnrichmentResult, EnrichmentUnavailable>;
}

/// Stand-in used when no credential is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledEnrichmentClient;

#[async_trait]
impl EnrichmentClient for DisabledEnrichmentClient {
    async fn enrich(
        &self,
        _request: &EnrichmentRequest<'_>,
    ) -> Result<EnrichmentResult, EnrichmentUnavailable> {
        Err(EnrichmentUnavailable::not_configured())
    }
}

/// Picks the OpenAI client when an API key is present, the disabled client otherwise.
pub fn client_from_config(
    config: &EnrichmentConfig,
) -> Result<Arc<dyn EnrichmentClient>, EnrichmentUnavailable> {
    match &config.api_key {
        Some(api_key) => {
            let client = OpenAiEnrichmentClient::new(api_key, &config.base_url, &config.model)?;
            Ok(Arc::new(client))
        }
        None => Ok(Arc::new(DisabledEnrichmentClient)),
    }
}
