//! The interactive menu loop.
//!
//! One state, six commands. Every command returns to the menu except
//! `Exit`.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;

use roster_core::{RosterConfig, RosterStore};

use crate::commands;
use crate::console::Console;

/// Everything a command handler can touch.
pub struct Session<R, W> {
    pub console: Console<R, W>,
    pub store: RosterStore,
    pub config: RosterConfig,
    pub rng: StdRng,
    /// Shown once at the top of the next redraw, then cleared.
    pub status: Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, config: RosterConfig, rng: StdRng) -> Self {
        Self {
            console,
            store: RosterStore::new(),
            config,
            rng,
            status: None,
        }
    }
}

/// What the loop does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub type Handler<R, W> = fn(&mut Session<R, W>) -> Result<Flow>;

/// Menu commands, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddStudents,
    AddCourses,
    AddMarks,
    ShowMarks,
    Exit,
    AddSampleData,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::AddStudents,
        Command::AddCourses,
        Command::AddMarks,
        Command::ShowMarks,
        Command::Exit,
        Command::AddSampleData,
    ];

    pub fn number(self) -> i64 {
        match self {
            Command::AddStudents => 1,
            Command::AddCourses => 2,
            Command::AddMarks => 3,
            Command::ShowMarks => 4,
            Command::Exit => 5,
            Command::AddSampleData => 6,
        }
    }

    pub fn from_number(n: i64) -> Option<Command> {
        Self::ALL.into_iter().find(|c| c.number() == n)
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::AddStudents => "Add student",
            Command::AddCourses => "Add course",
            Command::AddMarks => "Add mark",
            Command::ShowMarks => "Show student marks",
            Command::Exit => "Exit",
            Command::AddSampleData => "Add sample data",
        }
    }

    pub fn handler<R: BufRead, W: Write>(self) -> Handler<R, W> {
        match self {
            Command::AddStudents => commands::add_student::execute,
            Command::AddCourses => commands::add_course::execute,
            Command::AddMarks => commands::add_mark::execute,
            Command::ShowMarks => commands::show_marks::execute,
            Command::Exit => commands::exit::execute,
            Command::AddSampleData => commands::sample_data::execute,
        }
    }
}

/// Redraw the menu and dispatch commands until `Exit`.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    loop {
        draw(session)?;

        let choice = session
            .console
            .ask_menu_number("Choose one of the above options", 1)?;

        match Command::from_number(choice) {
            Some(command) => {
                tracing::debug!(?command, "dispatching");
                let handler: Handler<R, W> = command.handler();
                if handler(session)? == Flow::Exit {
                    return Ok(());
                }
            }
            None => {
                let message = session.console.theme().error("Invalid choice.");
                session.console.say(&message)?;
                session.status = Some(message);
            }
        }
    }
}

fn draw<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.clear()?;
    if let Some(status) = session.status.take() {
        session.console.say(&format!("{status}\n"))?;
    }

    let theme = session.console.theme();
    session
        .console
        .say(&theme.header("Student Mark Management System"))?;
    for command in Command::ALL {
        session
            .console
            .say(&format!("[{}] {}", command.number(), command.label()))?;
    }
    session.console.say("")?;
    Ok(())
}
