//! The "Add mark" command.

use std::io::{BufRead, Write};

use anyhow::Result;

use roster_core::{validate, Mark};

use crate::menu::{Flow, Session};

const NOTHING_TO_MARK: &str = "No students or courses available to add marks.";

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    let count = session
        .console
        .ask_number("How many marks do you want to add", 1)?;
    for _ in 0..count {
        if !session.store.is_ready_for_marks() {
            let message = session.console.theme().error(NOTHING_TO_MARK);
            session.console.say(&message)?;
            session.status = Some(message);
            break;
        }
        intake(session)?;
    }
    Ok(Flow::Continue)
}

/// Pick a student and a course from the registered ids, then read the mark.
fn intake<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let student_ids = session.store.student_ids();
    let student = session.console.select(&student_ids, 0)?;

    let course_ids = session.store.course_ids();
    let course = session.console.select(&course_ids, 0)?;

    let value = session
        .console
        .prompt_until("Enter mark (0-20): ", validate::mark)?;

    let course_id = course_ids[course].clone();
    session.store.add_mark(student, Mark::new(course_id, value))?;
    Ok(())
}
