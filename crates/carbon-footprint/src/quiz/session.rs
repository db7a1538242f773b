//! Per-run wizard state: the name step, one step per question, then results.
//!
//! A session owns its answers and result; nothing is shared between runs.

use super::catalog::{catalog, Question, QuizCatalog};
use super::locale::Locale;
use super::result::QuizResult;
use super::scoring::{AnswerSet, QUESTION_COUNT};
use serde::Serialize;

/// Name step, question steps, results step.
pub const TOTAL_STEPS: usize = QUESTION_COUNT + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Step {
    Name,
    Question(usize),
    Results,
}

impl Step {
    pub const fn position(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Question(index) => index + 1,
            Self::Results => TOTAL_STEPS - 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Collecting,
    Pending,
    Complete(QuizResult),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a name is required before starting the quiz")]
    NameRequired,
    #[error("no question is active at this step")]
    NotOnQuestion,
    #[error("question {index} must be answered before moving on")]
    Unanswered { index: usize },
    #[error("'{value}' is not an option for question {index}")]
    UnknownOption { index: usize, value: String },
    #[error("all five questions must be answered before calculating")]
    Incomplete,
    #[error("a calculation is already in progress for this session")]
    CalculationPending,
    #[error("no calculation is in progress for this session")]
    NotPending,
    #[error("this session already has a result; restart to calculate again")]
    AlreadyCalculated,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    locale: Locale,
    name: String,
    step: Step,
    answers: AnswerSet,
    phase: Phase,
}

impl QuizSession {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            name: String::new(),
            step: Step::Name,
            answers: AnswerSet::new(),
            phase: Phase::Collecting,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switching locale keeps answers: option values are shared across locales.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn catalog(&self) -> &'static QuizCatalog {
        catalog(self.locale)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.step {
            Step::Question(index) => self.catalog().question(index),
            _ => None,
        }
    }

    pub fn progress_percent(&self) -> u8 {
        let last = TOTAL_STEPS - 1;
        let position = self.step.position().min(last);
        ((position as f32 / last as f32) * 100.0).round() as u8
    }

    /// Moves forward one step without answering; the name step needs a name and
    /// a question step needs its answer already recorded.
    pub fn advance(&mut self) -> Result<Step, SessionError> {
        self.step = match self.step {
            Step::Name => {
                if self.name.trim().is_empty() {
                    return Err(SessionError::NameRequired);
                }
                Step::Question(0)
            }
            Step::Question(index) => {
                if self.answers.get(index).is_none() {
                    return Err(SessionError::Unanswered { index });
                }
                next_after(index)
            }
            Step::Results => Step::Results,
        };
        Ok(self.step)
    }

    /// Records the answer for the active question and moves to the next step.
    pub fn answer(&mut self, value: &str) -> Result<Step, SessionError> {
        let question = self.current_question().ok_or(SessionError::NotOnQuestion)?;
        if !question.accepts(value) {
            return Err(SessionError::UnknownOption {
                index: question.index,
                value: value.to_string(),
            });
        }

        self.answers
            .insert(question.index, value)
            .map_err(|_| SessionError::NotOnQuestion)?;
        self.step = next_after(question.index);
        Ok(self.step)
    }

    pub fn back(&mut self) -> Step {
        self.step = match self.step {
            Step::Name | Step::Question(0) => Step::Name,
            Step::Question(index) => Step::Question(index - 1),
            Step::Results => Step::Results,
        };
        self.step
    }

    /// Hands out the completed answers and marks the session pending. A
    /// completion is calculated once; only `restart` reopens the session.
    pub fn begin_calculation(&mut self) -> Result<AnswerSet, SessionError> {
        match self.phase {
            Phase::Pending => return Err(SessionError::CalculationPending),
            Phase::Complete(_) => return Err(SessionError::AlreadyCalculated),
            Phase::Collecting => {}
        }
        if !self.answers.is_complete() {
            return Err(SessionError::Incomplete);
        }

        self.phase = Phase::Pending;
        self.step = Step::Results;
        Ok(self.answers.clone())
    }

    pub fn finish(&mut self, result: QuizResult) -> Result<&QuizResult, SessionError> {
        if self.phase != Phase::Pending {
            return Err(SessionError::NotPending);
        }
        self.phase = Phase::Complete(result);
        match &self.phase {
            Phase::Complete(result) => Ok(result),
            _ => Err(SessionError::NotPending),
        }
    }

    /// Clears the pending flag after a calculation that produced no result.
    pub fn abandon_calculation(&mut self) {
        if self.phase == Phase::Pending {
            self.phase = Phase::Collecting;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match &self.phase {
            Phase::Complete(result) => Some(result),
            _ => None,
        }
    }

    /// Starts over from the name step, keeping the name and locale.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.phase = Phase::Collecting;
        self.step = Step::Name;
    }
}

fn next_after(index: usize) -> Step {
    if index + 1 < QUESTION_COUNT {
        Step::Question(index + 1)
    } else {
        Step::Results
    }
}
