//! Fixed-width grid renderer.
//!
//! Layout, one line each:
//!
//! ```text
//! | Data           | <name>         | <name>         ...
//! =================================================...
//! | ID             | <id>           | <id>           ...
//! | DOB            | <dob>          | <dob>          ...
//! | Course: <name> | <mark>         | <mark>         ...
//! ```

use roster_core::model::{Course, Student};
use roster_core::RosterStore;

const DATA_LABEL: &str = "Data";
const ID_LABEL: &str = "ID";
const DOB_LABEL: &str = "DOB";

/// Result of rendering the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    /// The grid, every line newline-terminated.
    Rendered(String),
    /// No students or no courses; there is nothing to tabulate.
    Empty,
}

/// Width shared by every column: the longest row label.
pub fn column_width(courses: &[Course]) -> usize {
    courses
        .iter()
        .map(|c| c.label().chars().count())
        .chain([DATA_LABEL, ID_LABEL, DOB_LABEL].map(|l| l.chars().count()))
        .max()
        .unwrap_or(0)
}

/// One cell: `| ` + content left-aligned in `width` + a trailing space.
///
/// Content wider than `width` is written whole, without padding.
pub fn format_cell(content: &str, width: usize) -> String {
    format!("| {content:<width$} ")
}

/// Render the store as a grid, or report that there is nothing to show.
pub fn render_table(store: &RosterStore) -> TableOutcome {
    let students = store.students();
    let courses = store.courses();
    if students.is_empty() || courses.is_empty() {
        tracing::debug!(
            students = students.len(),
            courses = courses.len(),
            "nothing to render"
        );
        return TableOutcome::Empty;
    }

    let width = column_width(courses);
    let mut out = String::new();

    push_row(&mut out, DATA_LABEL, students, width, |s| s.name.clone());
    out.push_str(&"=".repeat((width + 3) * (1 + students.len())));
    out.push('\n');
    push_row(&mut out, ID_LABEL, students, width, |s| s.id.clone());
    push_row(&mut out, DOB_LABEL, students, width, |s| s.dob.clone());

    for course in courses {
        push_row(&mut out, &course.label(), students, width, |s| {
            s.mark_for(&course.id)
                .map(|m| m.to_string())
                .unwrap_or_default()
        });
    }

    TableOutcome::Rendered(out)
}

fn push_row(
    out: &mut String,
    label: &str,
    students: &[Student],
    width: usize,
    cell: impl Fn(&Student) -> String,
) {
    out.push_str(&format_cell(label, width));
    for student in students {
        out.push_str(&format_cell(&cell(student), width));
    }
    out.push('\n');
}
