//! The "Add course" command.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use roster_core::{validate, Course};

use crate::menu::{Flow, Session};

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    let count = session
        .console
        .ask_number("How many courses do you want to add", 1)?;
    for _ in 0..count {
        intake(session)?;
    }
    Ok(Flow::Continue)
}

fn intake<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let store = &session.store;
    let name = session
        .console
        .prompt_until("Enter course name: ", |line| validate::course_name(line, store))?;
    let id = session
        .console
        .prompt_until("Enter course ID (e.g., 23C123): ", |line| {
            validate::course_id(line, store)
        })?;

    session
        .store
        .add_course(Course::new(name, id))
        .context("validated course was rejected by the store")?;
    Ok(())
}
