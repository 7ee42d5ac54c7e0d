//! The "Add student" command.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use roster_core::{validate, Student};

use crate::menu::{Flow, Session};

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    let count = session
        .console
        .ask_number("How many students do you want to add", 1)?;
    for _ in 0..count {
        intake(session)?;
    }
    Ok(Flow::Continue)
}

/// Read name, id and date of birth, re-prompting until each is valid.
fn intake<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let name = session.console.read_line("\nEnter student name: ")?;

    let store = &session.store;
    let id = session
        .console
        .prompt_until("Enter student ID (e.g., 23BI12325): ", |line| {
            validate::student_id(line, store)
        })?;

    let dob = session
        .console
        .prompt_until("Enter student date of birth (YYYY-MM-DD): ", validate::dob)?;

    session
        .store
        .add_student(Student::new(name, id, dob))
        .context("validated student was rejected by the store")?;
    Ok(())
}
