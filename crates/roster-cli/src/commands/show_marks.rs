//! The "Show student marks" command.

use std::io::{BufRead, Write};

use anyhow::Result;

use roster_report::{render_table, TableOutcome};

use crate::menu::{Flow, Session};

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    match render_table(&session.store) {
        TableOutcome::Rendered(grid) => {
            // grid lines are already newline-terminated
            session.console.say(grid.trim_end_matches('\n'))?;
        }
        TableOutcome::Empty => {
            let warning = session.console.theme().warning("No data to display.");
            session.console.say(&warning)?;
        }
    }
    session.console.pause()?;
    Ok(Flow::Continue)
}
