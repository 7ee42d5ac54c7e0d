//! Core data model types for the roster.
//!
//! Students own their marks; a mark points at a course by id only.

use std::fmt;

/// Lowest accepted mark.
pub const MARK_MIN: f64 = 0.0;
/// Highest accepted mark.
pub const MARK_MAX: f64 = 20.0;

/// A registered student.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Free-form display name.
    pub name: String,
    /// Registration id (e.g. `23BI12325`).
    pub id: String,
    /// Date of birth as entered, `YYYY-MM-DD`.
    pub dob: String,
    /// Marks in insertion order.
    pub marks: Vec<Mark>,
}

impl Student {
    /// Create a student with no marks.
    pub fn new(name: impl Into<String>, id: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            dob: dob.into(),
            marks: Vec::new(),
        }
    }

    /// The first mark recorded for `course_id`, if any.
    ///
    /// Duplicate marks for the same course are kept in the list; only the
    /// earliest one is ever reported.
    pub fn mark_for(&self, course_id: &str) -> Option<&Mark> {
        self.marks.iter().find(|m| m.course_id == course_id)
    }
}

/// A course marks can be recorded against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Display name, unique among courses.
    pub name: String,
    /// Course id, unique among courses. No format is imposed.
    pub id: String,
}

impl Course {
    /// Create a course from its display name and id.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Row label used by the report grid.
    pub fn label(&self) -> String {
        format!("Course: {}", self.name)
    }
}

/// The value of a mark, in the form it was produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// An integer mark, as drawn by the sample generator.
    Whole(u8),
    /// A mark typed by the operator.
    Decimal(f64),
}

impl Score {
    pub fn value(self) -> f64 {
        match self {
            Score::Whole(n) => f64::from(n),
            Score::Decimal(v) => v,
        }
    }
}

impl fmt::Display for Score {
    /// Integers print bare (`12`). Typed whole values keep one decimal
    /// place (`15.0`); other decimals print as-is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Score::Whole(n) => write!(f, "{n}"),
            Score::Decimal(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Score::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// A mark a student obtained in a course.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    /// Id of the course this mark belongs to.
    pub course_id: String,
    /// Score in `[MARK_MIN, MARK_MAX]`.
    pub score: Score,
}

impl Mark {
    /// A mark entered as a decimal number.
    pub fn new(course_id: impl Into<String>, value: f64) -> Self {
        Self {
            course_id: course_id.into(),
            score: Score::Decimal(value),
        }
    }

    /// An integer mark.
    pub fn whole(course_id: impl Into<String>, value: u8) -> Self {
        Self {
            course_id: course_id.into(),
            score: Score::Whole(value),
        }
    }

    /// Numeric value regardless of how the mark was produced.
    pub fn value(&self) -> f64 {
        self.score.value()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.score.fmt(f)
    }
}
