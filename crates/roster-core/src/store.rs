//! Append-only, in-memory record store.
//!
//! Students and courses are kept in insertion order for the lifetime of
//! the session. Nothing is removed or edited; the only mutation after
//! creation is appending a mark to a student.

use crate::error::RosterError;
use crate::model::{Course, Mark, Student};

/// Students and courses registered during the session.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    students: Vec<Student>,
    courses: Vec<Course>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a student. Rejects a student id that is already registered.
    pub fn add_student(&mut self, student: Student) -> Result<&Student, RosterError> {
        if self.has_student_id(&student.id) {
            tracing::warn!("rejected duplicate student id {}", student.id);
            return Err(RosterError::DuplicateStudentId(student.id));
        }
        tracing::debug!(id = %student.id, name = %student.name, "student added");
        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    /// Append a course. Rejects a name or id that is already registered.
    pub fn add_course(&mut self, course: Course) -> Result<&Course, RosterError> {
        if self.has_course_name(&course.name) {
            tracing::warn!("rejected duplicate course name {}", course.name);
            return Err(RosterError::DuplicateCourseName(course.name));
        }
        if self.has_course_id(&course.id) {
            tracing::warn!("rejected duplicate course id {}", course.id);
            return Err(RosterError::DuplicateCourseId(course.id));
        }
        tracing::debug!(id = %course.id, name = %course.name, "course added");
        self.courses.push(course);
        Ok(&self.courses[self.courses.len() - 1])
    }

    /// Append a mark to the student at `student_index`.
    ///
    /// The mark's course id is not checked against the registered courses.
    pub fn add_mark(&mut self, student_index: usize, mark: Mark) -> Result<(), RosterError> {
        let count = self.students.len();
        let student = self
            .students
            .get_mut(student_index)
            .ok_or(RosterError::UnknownStudent {
                index: student_index,
                count,
            })?;
        tracing::debug!(
            student = %student.id,
            course = %mark.course_id,
            mark = %mark,
            "mark added"
        );
        student.marks.push(mark);
        Ok(())
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Student ids in insertion order, for selection menus.
    pub fn student_ids(&self) -> Vec<String> {
        self.students.iter().map(|s| s.id.clone()).collect()
    }

    /// Course ids in insertion order, for selection menus.
    pub fn course_ids(&self) -> Vec<String> {
        self.courses.iter().map(|c| c.id.clone()).collect()
    }

    pub fn has_student_id(&self, id: &str) -> bool {
        self.students.iter().any(|s| s.id == id)
    }

    pub fn has_course_id(&self, id: &str) -> bool {
        self.courses.iter().any(|c| c.id == id)
    }

    pub fn has_course_name(&self, name: &str) -> bool {
        self.courses.iter().any(|c| c.name == name)
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Marks need at least one student and one course to point at.
    pub fn is_ready_for_marks(&self) -> bool {
        !self.students.is_empty() && !self.courses.is_empty()
    }
}
