//! Error types for the roster.
//!
//! `ValidationError` messages double as the retry prompt shown to the
//! operator, so they are phrased as instructions.

use thiserror::Error;

/// Rejection of a single interactive entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Student id does not match `NNBINNNNN`.
    #[error("Invalid ID, try again (format: 23BI12325)")]
    InvalidStudentId,

    /// Student id is already registered.
    #[error("ID already exists, try again")]
    DuplicateStudentId,

    /// Date of birth does not look like `YYYY-MM-DD`.
    #[error("Invalid date of birth, try again")]
    InvalidDob,

    /// Course name is already taken.
    #[error("Course already exists, try again")]
    DuplicateCourseName,

    /// Course id is already taken.
    #[error("ID already exists, try again")]
    DuplicateCourseId,

    /// Mark is not a number in `[0, 20]`.
    #[error("Invalid mark, try again")]
    InvalidMark,

    /// Menu selection is not one of the listed options.
    #[error("Invalid choice, try again")]
    InvalidChoice,

    /// Count or menu number is not a non-negative integer.
    #[error("Invalid choice, try again")]
    InvalidNumber,
}

/// Errors raised by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("student ID already registered: {0}")]
    DuplicateStudentId(String),

    #[error("course ID already registered: {0}")]
    DuplicateCourseId(String),

    #[error("course name already registered: {0}")]
    DuplicateCourseName(String),

    /// A mark was addressed to a student index that does not exist.
    #[error("no student at index {index} ({count} registered)")]
    UnknownStudent { index: usize, count: usize },
}

/// Errors raised while generating sample data.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Not enough free ids left in the sample id pattern.
    #[error("sample {kind} ids exhausted: {requested} requested, {available} available")]
    IdsExhausted {
        kind: &'static str,
        requested: usize,
        available: usize,
    },

    /// A candidate name list is empty.
    #[error("no candidate {0} names configured")]
    EmptyNamePool(&'static str),

    #[error(transparent)]
    Store(#[from] RosterError),
}
