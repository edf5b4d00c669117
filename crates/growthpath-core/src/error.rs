//! Error types for scoring, storage, and plan generation.

use thiserror::Error;

use crate::model::Domain;

/// Errors raised by the key-value store and its typed wrapper.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("failed to encode value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored entry exists but does not decode into the expected shape.
    #[error("stored entry '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while driving an assessment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessmentError {
    /// A Likert answer outside 1..=5.
    #[error("answer {value} for question {question} is outside 1..=5")]
    InvalidAnswer { question: usize, value: u8 },

    /// The questionnaire was given the wrong number of answers.
    #[error("expected {expected} answers, got {actual}")]
    WrongAnswerCount { expected: usize, actual: usize },

    /// Input was submitted to a session that already finished.
    #[error("the {0} session has already finished")]
    SessionFinished(&'static str),

    /// A recall or answer was submitted before the session was ready for it.
    #[error("the {0} session is not ready for this input")]
    OutOfOrder(&'static str),

    /// A speaking topic index outside the topic list.
    #[error("topic {index} does not exist (there are {available} topics)")]
    InvalidTopic { index: usize, available: usize },
}

/// Errors raised by the report aggregator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Not every assessment has a stored result yet.
    #[error("assessments not completed: {}", format_domains(.missing))]
    MissingAssessments { missing: Vec<Domain> },
}

/// Errors raised by plan creation and progress tracking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// Plans only come in 45, 90 and 180 day lengths.
    #[error("unsupported plan duration {0} days (expected 45, 90 or 180)")]
    InvalidDuration(u32),

    /// A week index outside the plan.
    #[error("week {week} is outside the plan (1..={total})")]
    WeekOutOfRange { week: u32, total: u32 },

    /// No plan has been created yet.
    #[error("no improvement plan has been created")]
    NoPlan,
}

fn format_domains(domains: &[Domain]) -> String {
    domains
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
