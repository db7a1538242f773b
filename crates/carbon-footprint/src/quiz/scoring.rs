use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const QUESTION_COUNT: usize = 5;

/// Highest attainable raw sum: five categories at three points each.
pub const MAX_RAW_POINTS: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Transportation,
    Mode,
    Meat,
    Energy,
    Shopping,
}

impl ScoreCategory {
    pub const fn ordered() -> [Self; QUESTION_COUNT] {
        [
            Self::Transportation,
            Self::Mode,
            Self::Meat,
            Self::Energy,
            Self::Shopping,
        ]
    }

    /// The category scored by the question at `index`.
    ///
    /// Panics when `index >= QUESTION_COUNT`; callers go through
    /// [`AnswerSet`], which never holds such an index.
    pub const fn for_question(index: usize) -> Self {
        Self::ordered()[index]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Transportation => "Transportation habits",
            Self::Mode => "Primary transport mode",
            Self::Meat => "Meat consumption",
            Self::Energy => "Energy usage",
            Self::Shopping => "Shopping habits",
        }
    }

    pub const fn point_table(self) -> &'static [(&'static str, u8); 4] {
        match self {
            Self::Transportation => &[
                ("never", 3),
                ("occasionally", 2),
                ("regularly", 1),
                ("always", 0),
            ],
            Self::Mode => &[("car", 3), ("bicycle", 0), ("walking", 0), ("public", 1)],
            Self::Meat => &[
                ("daily", 3),
                ("weekly", 2),
                ("occasionally", 1),
                ("never", 0),
            ],
            Self::Energy => &[
                ("none", 3),
                ("efficient", 2),
                ("renewable", 1),
                ("minimal", 0),
            ],
            Self::Shopping => &[
                ("weekly", 3),
                ("monthly", 2),
                ("yearly", 1),
                ("rarely", 0),
            ],
        }
    }

    pub fn points(self, answer: &str) -> Option<u8> {
        self.point_table()
            .iter()
            .find(|(value, _)| *value == answer)
            .map(|(_, points)| *points)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("question index {index} is out of range (expected 0 to 4)")]
    QuestionOutOfRange { index: usize },
    #[error("question {index} has not been answered")]
    MissingAnswer { index: usize },
    #[error("'{value}' is not a valid answer for {category:?} (question {index})")]
    InvalidAnswer {
        index: usize,
        category: ScoreCategory,
        value: String,
    },
}

/// One selected option value per question, iterated in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<usize, String>", into = "BTreeMap<usize, String>")]
pub struct AnswerSet {
    answers: BTreeMap<usize, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from answers listed in question order.
    pub fn from_ordered<I, S>(values: I) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (index, value) in values.into_iter().enumerate() {
            set.insert(index, value)?;
        }
        Ok(set)
    }

    /// Records (or replaces) the answer for `index`.
    pub fn insert(&mut self, index: usize, value: impl Into<String>) -> Result<(), ScoringError> {
        if index >= QUESTION_COUNT {
            return Err(ScoringError::QuestionOutOfRange { index });
        }
        self.answers.insert(index, value.into());
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.answers
            .iter()
            .map(|(index, value)| (*index, value.as_str()))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

impl TryFrom<BTreeMap<usize, String>> for AnswerSet {
    type Error = ScoringError;

    fn try_from(answers: BTreeMap<usize, String>) -> Result<Self, Self::Error> {
        if let Some(index) = answers.keys().copied().find(|index| *index >= QUESTION_COUNT) {
            return Err(ScoringError::QuestionOutOfRange { index });
        }
        Ok(Self { answers })
    }
}

impl From<AnswerSet> for BTreeMap<usize, String> {
    fn from(set: AnswerSet) -> Self {
        set.answers
    }
}

/// Footprint severity on a 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedScore(u8);

impl NormalizedScore {
    pub const MAX: u8 = 100;

    /// Returns `None` above 100.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn from_raw_points(raw_points: u8) -> Self {
        let raw = raw_points.min(MAX_RAW_POINTS);
        let scaled = ((raw as f32 / MAX_RAW_POINTS as f32) * 100.0).round();
        Self(scaled.clamp(0.0, 100.0) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for NormalizedScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryPoints {
    pub category: ScoreCategory,
    pub points: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub breakdown: [CategoryPoints; QUESTION_COUNT],
    pub raw_points: u8,
    pub score: NormalizedScore,
}

/// Sums the per-category points of a complete answer set and rescales the
/// total against [`MAX_RAW_POINTS`].
pub fn score_answers(answers: &AnswerSet) -> Result<ScoreCard, ScoringError> {
    let mut breakdown = ScoreCategory::ordered().map(|category| CategoryPoints {
        category,
        points: 0,
    });

    for (index, entry) in breakdown.iter_mut().enumerate() {
        let value = answers
            .get(index)
            .ok_or(ScoringError::MissingAnswer { index })?;
        let category = entry.category;
        entry.points = category
            .points(value)
            .ok_or_else(|| ScoringError::InvalidAnswer {
                index,
                category,
                value: value.to_string(),
            })?;
    }

    let raw_points: u8 = breakdown.iter().map(|entry| entry.points).sum();

    Ok(ScoreCard {
        breakdown,
        raw_points,
        score: NormalizedScore::from_raw_points(raw_points),
    })
}
