use std::sync::Arc;

use tracing::{info, warn};

use super::fallback;
use super::locale::Locale;
use super::result::{QuizResult, ResultSource};
use super::scoring::{score_answers, AnswerSet, NormalizedScore, ScoringError};
use super::session::{QuizSession, SessionError};
use crate::enrichment::{EnrichmentClient, EnrichmentRequest, EnrichmentResult};

/// Scores a completed quiz and resolves its impact text, preferring the
/// enrichment client and falling back to the static tables on any failure.
pub struct FootprintService<C: ?Sized> {
    client: Arc<C>,
}

impl<C> FootprintService<C>
where
    C: EnrichmentClient + ?Sized,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn calculate(
        &self,
        answers: &AnswerSet,
        locale: Locale,
    ) -> Result<QuizResult, ScoringError> {
        let card = score_answers(answers)?;
        Ok(self.resolve(card.score, answers, locale).await)
    }

    /// Single enrichment attempt, then exactly one of the two continuations.
    pub async fn resolve(
        &self,
        score: NormalizedScore,
        answers: &AnswerSet,
        locale: Locale,
    ) -> QuizResult {
        let request = EnrichmentRequest {
            score,
            answers,
            locale,
        };

        match self
            .client
            .enrich(&request)
            .await
            .and_then(EnrichmentResult::validated)
        {
            Ok(enrichment) => {
                info!(%score, %locale, source = "generated", "quiz result resolved");
                QuizResult::assemble(score, enrichment, ResultSource::Generated, locale)
            }
            Err(err) => {
                warn!(
                    %score,
                    %locale,
                    kind = %err.kind,
                    detail = %err.detail,
                    bucket = fallback::Bucket::for_score(score).label(),
                    "enrichment unavailable, using static fallback"
                );
                let enrichment = fallback::resolve(score, locale);
                QuizResult::assemble(score, enrichment, ResultSource::Fallback, locale)
            }
        }
    }

    /// Runs the calculation for a finished wizard session and stores the result on it.
    pub async fn complete_session(
        &self,
        session: &mut QuizSession,
    ) -> Result<QuizResult, QuizError> {
        let answers = session.begin_calculation()?;

        match self.calculate(&answers, session.locale()).await {
            Ok(result) => {
                session.finish(result.clone())?;
                Ok(result)
            }
            Err(err) => {
                session.abandon_calculation();
                Err(err.into())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::{DisabledEnrichmentClient, EnrichmentUnavailable, UnavailableKind};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedClient {
        outcome: Result<EnrichmentResult, EnrichmentUnavailable>,
        calls: AtomicUsize,
    }

    impl ScriptedClient {
        fn new(outcome: Result<EnrichmentResult, EnrichmentUnavailable>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EnrichmentClient for ScriptedClient {
        async fn enrich(
            &self,
            _request: &EnrichmentRequest<'_>,
        ) -> Result<EnrichmentResult, EnrichmentUnavailable> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn generated() -> EnrichmentResult {
        EnrichmentResult {
            impact: "Big footprint energy 🚗💨".to_string(),
            recommendations: vec![
                "🚲 Ride to work twice a week".to_string(),
                "🌱 Try plant-based dinners".to_string(),
                "🔌 Switch to a green tariff".to_string(),
            ],
        }
    }

    fn high_answers() -> AnswerSet {
        AnswerSet::from_ordered(["never", "car", "daily", "none", "weekly"]).expect("answers")
    }

    #[tokio::test]
    async fn uses_generated_content_on_success() {
        let client = Arc::new(ScriptedClient::new(Ok(generated())));
        let service = FootprintService::new(client.clone());

        let result = service
            .calculate(&high_answers(), Locale::En)
            .await
            .expect("scores");

        assert_eq!(result.score().value(), 100);
        assert_eq!(result.source(), ResultSource::Generated);
        assert_eq!(result.impact(), generated().impact);
        assert_eq!(result.recommendations(), generated().recommendations.as_slice());
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn falls_back_when_client_fails() {
        let failure = EnrichmentUnavailable::new(UnavailableKind::Status, "HTTP 503");
        let client = Arc::new(ScriptedClient::new(Err(failure)));
        let service = FootprintService::new(client.clone());

        let result = service
            .calculate(&high_answers(), Locale::En)
            .await
            .expect("scores");

        let expected = QuizResult::assemble(
            result.score(),
            fallback::resolve(result.score(), Locale::En),
            ResultSource::Fallback,
            Locale::En,
        );
        assert_eq!(result, expected);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1, "no retry");
    }

    #[tokio::test]
    async fn falls_back_when_client_output_is_blank() {
        let blank = EnrichmentResult {
            impact: String::new(),
            recommendations: vec!["🚲".to_string()],
        };
        let service = FootprintService::new(Arc::new(ScriptedClient::new(Ok(blank))));

        let result = service
            .calculate(&high_answers(), Locale::Id)
            .await
            .expect("scores");
        assert_eq!(result.source(), ResultSource::Fallback);
        assert_eq!(result.recommendations().len(), 4);
    }

    #[tokio::test]
    async fn invalid_answers_never_reach_the_client() {
        let client = Arc::new(ScriptedClient::new(Ok(generated())));
        let service = FootprintService::new(client.clone());
        let answers =
            AnswerSet::from_ordered(["never", "car", "daily", "nuclear", "weekly"]).expect("set");

        let err = service
            .calculate(&answers, Locale::En)
            .await
            .expect_err("invalid answer");
        assert!(matches!(err, ScoringError::InvalidAnswer { index: 3, .. }));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn complete_session_stores_result() {
        let service: FootprintService<dyn EnrichmentClient> =
            FootprintService::new(Arc::new(DisabledEnrichmentClient));
        let mut session = QuizSession::new(Locale::En);
        session.set_name("Tono");
        session.advance().expect("started");
        for value in ["always", "walking", "never", "minimal", "rarely"] {
            session.answer(value).expect("answered");
        }

        let result = service
            .complete_session(&mut session)
            .await
            .expect("completes");

        assert_eq!(result.score().value(), 0);
        assert_eq!(result.recommendations().len(), 2);
        assert_eq!(session.result(), Some(&result));
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn completed_session_is_not_enriched_twice() {
        let client = Arc::new(ScriptedClient::new(Ok(generated())));
        let service = FootprintService::new(client.clone());
        let mut session = QuizSession::new(Locale::En);
        session.set_name("Wulan");
        session.advance().expect("started");
        for value in ["never", "car", "daily", "none", "weekly"] {
            session.answer(value).expect("answered");
        }

        let first = service
            .complete_session(&mut session)
            .await
            .expect("completes");
        let err = service
            .complete_session(&mut session)
            .await
            .expect_err("already calculated");

        assert!(matches!(
            err,
            QuizError::Session(SessionError::AlreadyCalculated)
        ));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.result(), Some(&first));
    }

    #[tokio::test]
    async fn complete_session_requires_all_answers() {
        let service = FootprintService::new(Arc::new(DisabledEnrichmentClient));
        let mut session = QuizSession::new(Locale::En);
        let err = service
            .complete_session(&mut session)
            .await
            .expect_err("incomplete");
        assert!(matches!(err, QuizError::Session(SessionError::Incomplete)));
    }
}
