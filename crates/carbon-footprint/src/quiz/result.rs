use super::locale::Locale;
use super::scoring::NormalizedScore;
use crate::enrichment::EnrichmentResult;
use serde::Serialize;

/// Where the impact text and recommendations came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    score: NormalizedScore,
    summary: String,
    impact: String,
    recommendations: Vec<String>,
    source: ResultSource,
}

impl QuizResult {
    pub fn assemble(
        score: NormalizedScore,
        enrichment: EnrichmentResult,
        source: ResultSource,
        locale: Locale,
    ) -> Self {
        let EnrichmentResult {
            impact,
            recommendations,
        } = enrichment;

        Self {
            score,
            summary: summary_sentence(score, locale),
            impact,
            recommendations,
            source,
        }
    }

    pub fn score(&self) -> NormalizedScore {
        self.score
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn impact(&self) -> &str {
        &self.impact
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn source(&self) -> ResultSource {
        self.source
    }
}

pub fn summary_sentence(score: NormalizedScore, locale: Locale) -> String {
    match locale {
        Locale::En => {
            format!("Based on your answers, your carbon footprint score is {score} out of 100.")
        }
        Locale::Id => {
            format!("Berdasarkan jawaban Anda, skor jejak karbon Anda adalah {score} dari 100.")
        }
    }
}
