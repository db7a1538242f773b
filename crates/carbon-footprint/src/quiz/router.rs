use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::{catalog, QuizCatalog};
use super::locale::Locale;
use super::result::QuizResult;
use super::scoring::AnswerSet;
use super::service::FootprintService;
use super::share::{share_links, ShareLinks};
use crate::enrichment::EnrichmentClient;

pub struct QuizApiState<C: ?Sized> {
    service: Arc<FootprintService<C>>,
    public_url: Option<Arc<str>>,
}

impl<C: ?Sized> Clone for QuizApiState<C> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            public_url: self.public_url.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Deserialize)]
pub struct ResultRequest {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub name: Option<String>,
    pub answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub name: Option<String>,
    pub result: QuizResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<ShareLinks>,
}

/// Router exposing the localized quiz content and result resolution.
pub fn quiz_router<C>(service: Arc<FootprintService<C>>, public_url: Option<String>) -> Router
where
    C: EnrichmentClient + ?Sized + 'static,
{
    let state = QuizApiState {
        service,
        public_url: public_url.map(Arc::from),
    };

    Router::new()
        .route("/api/v1/quiz", get(catalog_handler))
        .route("/api/v1/quiz/result", post(result_handler::<C>))
        .with_state(state)
}

pub(crate) async fn catalog_handler(
    Query(query): Query<LocaleQuery>,
) -> Json<&'static QuizCatalog> {
    Json(catalog(query.locale))
}

pub(crate) async fn result_handler<C>(
    State(state): State<QuizApiState<C>>,
    Json(request): Json<ResultRequest>,
) -> Response
where
    C: EnrichmentClient + ?Sized + 'static,
{
    let ResultRequest {
        locale,
        name,
        answers,
    } = request;

    match state.service.calculate(&answers, locale).await {
        Ok(result) => {
            let share = state
                .public_url
                .as_deref()
                .map(|url| share_links(url, result.score(), locale));
            let name = name
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty());
            (StatusCode::OK, Json(ResultResponse { name, result, share })).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
