use serde::Serialize;
use std::fmt;

/// Why enrichment could not be produced. Callers only branch on success versus
/// failure; the kind exists for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableKind {
    NotConfigured,
    Transport,
    Status,
    Malformed,
    Schema,
    Refused,
}

impl UnavailableKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Transport => "transport",
            Self::Status => "status",
            Self::Malformed => "malformed",
            Self::Schema => "schema",
            Self::Refused => "refused",
        }
    }
}

impl fmt::Display for UnavailableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("enrichment unavailable ({kind}): {detail}")]
pub struct EnrichmentUnavailable {
    pub kind: UnavailableKind,
    pub detail: String,
}

impl EnrichmentUnavailable {
    pub fn new(kind: UnavailableKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn not_configured() -> Self {
        Self::new(UnavailableKind::NotConfigured, "no API key configured")
    }

    pub fn schema(detail: impl Into<String>) -> Self {
        Self::new(UnavailableKind::Schema, detail)
    }
}

impl From<reqwest::Error> for EnrichmentUnavailable {
    fn from(err: reqwest::Error) -> Self {
        Self::new(UnavailableKind::Transport, err.to_string())
    }
}
