//! Entry validators.
//!
//! Each validator takes a raw input line (and the store, where uniqueness
//! matters) and either returns the accepted value or a `ValidationError`
//! describing what to re-enter.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::model::{MARK_MAX, MARK_MIN};
use crate::store::RosterStore;

static STUDENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}BI[0-9]{5}$").expect("invalid student id regex"));

// Anchored at the start only: trailing text after the date is tolerated.
static DOB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("invalid dob regex"));

/// Accept a student id matching `NNBINNNNN` that is not yet registered.
pub fn student_id(input: &str, store: &RosterStore) -> Result<String, ValidationError> {
    if !STUDENT_ID_RE.is_match(input) {
        return Err(ValidationError::InvalidStudentId);
    }
    if store.has_student_id(input) {
        return Err(ValidationError::DuplicateStudentId);
    }
    Ok(input.to_string())
}

/// Accept a date of birth shaped like `YYYY-MM-DD`. Not checked against a calendar.
pub fn dob(input: &str) -> Result<String, ValidationError> {
    if DOB_RE.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(ValidationError::InvalidDob)
    }
}

/// Accept a course name not yet used by another course.
pub fn course_name(input: &str, store: &RosterStore) -> Result<String, ValidationError> {
    if store.has_course_name(input) {
        return Err(ValidationError::DuplicateCourseName);
    }
    Ok(input.to_string())
}

/// Accept a course id not yet used by another course.
pub fn course_id(input: &str, store: &RosterStore) -> Result<String, ValidationError> {
    if store.has_course_id(input) {
        return Err(ValidationError::DuplicateCourseId);
    }
    Ok(input.to_string())
}

/// Parse a mark in the closed interval `[0, 20]`.
pub fn mark(input: &str) -> Result<f64, ValidationError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidMark)?;
    if (MARK_MIN..=MARK_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidMark)
    }
}

/// Parse a 1-indexed choice among `option_count` options into a 0-based index.
///
/// Empty input selects `default` (already 0-based).
pub fn selection(
    input: &str,
    option_count: usize,
    default: usize,
) -> Result<usize, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    let choice: usize = input.parse().map_err(|_| ValidationError::InvalidChoice)?;
    if (1..=option_count).contains(&choice) {
        Ok(choice - 1)
    } else {
        Err(ValidationError::InvalidChoice)
    }
}

/// Parse a non-negative integer, with empty input selecting `default`.
pub fn number(input: &str, default: usize) -> Result<usize, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    input.parse().map_err(|_| ValidationError::InvalidNumber)
}

/// Parse a menu number. Any integer is accepted, including negatives; the
/// caller decides which ones name a command.
pub fn menu_number(input: &str, default: i64) -> Result<i64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    input.parse().map_err(|_| ValidationError::InvalidChoice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Student};

    fn store_with_entries() -> RosterStore {
        let mut store = RosterStore::new();
        store
            .add_student(Student::new("Ada", "23BI12345", "2000-01-01"))
            .unwrap();
        store.add_course(Course::new("Maths", "23C123")).unwrap();
        store
    }

    #[test]
    fn student_id_format() {
        let store = RosterStore::new();
        assert_eq!(student_id("23BI12325", &store).unwrap(), "23BI12325");
        for bad in ["", "23BI1234", "23BI123456", "23bi12345", "2BI123456", " 23BI12345", "23BI12345 "] {
            assert_eq!(
                student_id(bad, &store),
                Err(ValidationError::InvalidStudentId),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn student_id_must_be_unique() {
        let store = store_with_entries();
        assert_eq!(
            student_id("23BI12345", &store),
            Err(ValidationError::DuplicateStudentId)
        );
        assert!(student_id("23BI12346", &store).is_ok());
    }

    #[test]
    fn dob_shape_only() {
        assert!(dob("2000-01-01").is_ok());
        // no calendar check
        assert!(dob("2000-99-99").is_ok());
        assert!(dob("2000-01-01T00:00").is_ok());
        assert_eq!(dob("01-01-2000"), Err(ValidationError::InvalidDob));
        assert_eq!(dob("2000/01/01"), Err(ValidationError::InvalidDob));
        assert_eq!(dob(""), Err(ValidationError::InvalidDob));
    }

    #[test]
    fn course_name_and_id_collisions() {
        let store = store_with_entries();
        assert_eq!(
            course_name("Maths", &store),
            Err(ValidationError::DuplicateCourseName)
        );
        assert_eq!(course_name("Physics", &store).unwrap(), "Physics");
        assert_eq!(
            course_id("23C123", &store),
            Err(ValidationError::DuplicateCourseId)
        );
        // no format constraint on course ids
        assert_eq!(course_id("anything", &store).unwrap(), "anything");
    }

    #[test]
    fn mark_range_is_closed() {
        assert_eq!(mark("0").unwrap(), 0.0);
        assert_eq!(mark("20").unwrap(), 20.0);
        assert_eq!(mark(" 12.5 ").unwrap(), 12.5);
        for bad in ["-0.1", "20.01", "abc", "", "NaN", "inf"] {
            assert_eq!(mark(bad), Err(ValidationError::InvalidMark), "accepted {bad:?}");
        }
    }

    #[test]
    fn selection_defaults_and_bounds() {
        assert_eq!(selection("", 3, 0).unwrap(), 0);
        assert_eq!(selection("", 3, 2).unwrap(), 2);
        assert_eq!(selection("1", 3, 0).unwrap(), 0);
        assert_eq!(selection("3", 3, 0).unwrap(), 2);
        assert_eq!(selection("0", 3, 0), Err(ValidationError::InvalidChoice));
        assert_eq!(selection("4", 3, 0), Err(ValidationError::InvalidChoice));
        assert_eq!(selection("two", 3, 0), Err(ValidationError::InvalidChoice));
    }

    #[test]
    fn number_defaults() {
        assert_eq!(number("", 1).unwrap(), 1);
        assert_eq!(number("7", 1).unwrap(), 7);
        assert_eq!(number("0", 1).unwrap(), 0);
        assert_eq!(number("-2", 1), Err(ValidationError::InvalidNumber));
        assert_eq!(number("x", 1), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn error_messages_read_as_retry_prompts() {
        assert_eq!(
            ValidationError::InvalidStudentId.to_string(),
            "Invalid ID, try again (format: 23BI12325)"
        );
        assert_eq!(ValidationError::InvalidMark.to_string(), "Invalid mark, try again");
    }

    #[test]
    fn menu_number_accepts_any_integer() {
        assert_eq!(menu_number("", 1).unwrap(), 1);
        assert_eq!(menu_number(" 4 ", 1).unwrap(), 4);
        assert_eq!(menu_number("-1", 1).unwrap(), -1);
        assert_eq!(menu_number("99", 1).unwrap(), 99);
        assert_eq!(menu_number("abc", 1), Err(ValidationError::InvalidChoice));
        assert_eq!(menu_number("1.5", 1), Err(ValidationError::InvalidChoice));
    }
}
