//! The "Exit" command.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::menu::{Flow, Session};

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    tracing::info!(
        students = session.store.student_count(),
        courses = session.store.course_count(),
        "session ended"
    );
    Ok(Flow::Exit)
}
