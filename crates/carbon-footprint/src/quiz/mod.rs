//! The carbon footprint quiz: content, scoring, fallback content, result
//! assembly, the wizard session, and the HTTP surface.

pub mod catalog;
pub mod fallback;
pub mod locale;
pub mod result;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod share;

pub use catalog::{catalog, Question, QuestionOption, QuizCatalog, UiStrings};
pub use fallback::Bucket;
pub use locale::{Locale, UnsupportedLocale};
pub use result::{QuizResult, ResultSource};
pub use router::quiz_router;
pub use scoring::{
    score_answers, AnswerSet, NormalizedScore, ScoreCard, ScoreCategory, ScoringError,
    MAX_RAW_POINTS, QUESTION_COUNT,
};
pub use service::{FootprintService, QuizError};
pub use session::{QuizSession, SessionError, Step};
pub use share::ShareLinks;
