use crate::config::ConfigError;
use crate::enrichment::EnrichmentUnavailable;
use crate::quiz::QuizError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Enrichment(EnrichmentUnavailable),
    Quiz(QuizError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Enrichment(err) => write!(f, "enrichment client error: {}", err),
            AppError::Quiz(err) => write!(f, "quiz error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Enrichment(err) => Some(err),
            AppError::Quiz(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Quiz(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Enrichment(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<EnrichmentUnavailable> for AppError {
    fn from(value: EnrichmentUnavailable) -> Self {
        Self::Enrichment(value)
    }
}

impl From<QuizError> for AppError {
    fn from(value: QuizError) -> Self {
        Self::Quiz(value)
    }
}

impl From<crate::quiz::ScoringError> for AppError {
    fn from(value: crate::quiz::ScoringError) -> Self {
        Self::Quiz(QuizError::Scoring(value))
    }
}

impl From<crate::quiz::SessionError> for AppError {
    fn from(value: crate::quiz::SessionError) -> Self {
        Self::Quiz(QuizError::Session(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::ScoringError;

    #[test]
    fn quiz_errors_map_to_unprocessable_entity() {
        let err: AppError = ScoringError::MissingAnswer { index: 2 }.into();
        assert_eq!(
            err.to_string(),
            "quiz error: question 2 has not been answered"
        );
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn process_errors_map_to_internal_error() {
        let err: AppError = ConfigError::InvalidPort.into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
