//! The "Add sample data" command.

use std::io::{BufRead, Write};

use anyhow::Result;

use roster_core::sample::SampleGenerator;

use crate::menu::{Flow, Session};

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    let theme = session.console.theme();
    let status = match SampleGenerator::new(&session.config.sample)
        .populate(&mut session.store, &mut session.rng)
    {
        Ok(_) => theme.success("Sample data added"),
        Err(e) => {
            tracing::warn!("sample data generation failed: {e}");
            theme.error(&format!("Sample data not added: {e}"))
        }
    };
    session.status = Some(status);
    Ok(Flow::Continue)
}
