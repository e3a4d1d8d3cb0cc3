//! Interactive RPN calculator shell.
//!
//! Reads lines of whitespace-separated tokens and feeds them to a single
//! [`rpncalc::Evaluator`], printing the top of the stack after each line.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

mod command;
mod config;
mod session;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::command::BANNER;
use crate::config::{BatchPolicy, ShellConfig};
use crate::session::{Flow, Session};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "rpncalc", version = rpncalc::VERSION, about = "Reverse Polish Notation calculator")]
struct Args {
    /// What to do with the rest of a line after a rejected token
    #[arg(long, value_enum, default_value_t = BatchPolicy::Continue)]
    on_error: BatchPolicy,

    /// Evaluate this line and exit instead of starting the shell (repeatable)
    #[arg(short, long = "eval", value_name = "LINE")]
    eval: Vec<String>,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Load and save line history in this file
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,
}

impl Args {
    fn to_config(&self) -> ShellConfig {
        ShellConfig {
            banner: !self.no_banner,
            history: self.history.clone(),
            ..ShellConfig::with_policy(self.on_error)
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut session = Session::new(args.to_config());

    let outcome = if args.eval.is_empty() {
        run_interactive(&mut session)
    } else {
        run_batch(&mut session, &args.eval)
    };
    debug!(depth = session.evaluator().len(), "session ended");
    outcome
}

/// Evaluate `-e` lines in order, then exit.
fn run_batch(session: &mut Session, lines: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        if session.handle(line, &mut out)? == Flow::Quit {
            break;
        }
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}

fn run_interactive(session: &mut Session) -> Result<()> {
    let mut rl = DefaultEditor::new().context("failed to initialise line editor")?;
    let config = session.config().clone();

    if let Some(path) = &config.history {
        if let Err(e) = rl.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    if config.banner {
        println!("{BANNER}");
    }

    let stdout = io::stdout();
    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                let mut out = stdout.lock();
                let flow = session.handle(&line, &mut out)?;
                out.flush()?;
                if flow == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\nExiting calculator.");
                break;
            }
            Err(e) => return Err(e).context("failed to read input"),
        }
    }

    if let Some(path) = &config.history {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
    Ok(())
}
