//! roster CLI — the interactive student mark manager.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use roster_core::{load_config_from, RosterConfig};

mod commands;
mod console;
mod menu;
mod theme;

use console::{Console, PromptError};
use menu::Session;
use theme::Theme;

#[derive(Parser)]
#[command(name = "roster", version, about = "In-memory student mark manager")]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Do not clear the screen before each menu redraw
    #[arg(long)]
    no_clear: bool,

    /// Seed for sample data generation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roster=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    let theme = Theme::new(config.color);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?cli.seed, "session started");

    let session_task = tokio::task::spawn_blocking(move || {
        let clear_screen = config.clear_screen;
        let console = Console::new(io::stdin().lock(), io::stdout(), theme, clear_screen);
        let mut session = Session::new(console, config, rng);
        menu::run(&mut session)
    });

    let outcome = tokio::select! {
        joined = session_task => joined.context("menu loop panicked"),
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted");
            farewell(theme);
            process::exit(0);
        }
    };

    match outcome.and_then(|result| result) {
        Ok(()) => {}
        Err(e) if is_input_closed(&e) => farewell(theme),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Load the config file (if any) and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<RosterConfig> {
    let mut config = load_config_from(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }
    if cli.no_clear {
        config.clear_screen = false;
    }
    Ok(config)
}

fn is_input_closed(e: &anyhow::Error) -> bool {
    matches!(e.downcast_ref::<PromptError>(), Some(PromptError::Closed))
}

fn farewell(theme: Theme) {
    println!("\n{}", theme.error("Exiting..."));
}
