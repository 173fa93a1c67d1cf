//! Sisfila - front desk for a department service queue
//!
//! Drives one in-memory department from stdin or a script file.

mod config;
mod logging;
mod output;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use sisfila_core::domain::Department;
use sisfila_core::AppError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use tracing::{info, warn};

use config::Cli;
use session::{parse_line, Response, Session};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = "sisfila> ";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    logging::init(cli.log_format);
    cli.validate()?;

    info!("Sisfila v{} (core v{}) starting...", VERSION, sisfila_core::VERSION);

    // 2. Build the department
    let department = Department::new(&cli.code, cli.name.clone());
    if !department.is_valid() {
        warn!(
            code = %department.code(),
            "Department code is not valid (expected letters A-Z only)"
        );
    }
    info!(code = %department.code(), name = %department.name(), "Department open");

    let mut session = Session::new(department);

    // 3. Pick the command source
    let stdout = io::stdout();
    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run(&mut session, BufReader::new(file), stdout.lock(), false, cli.json)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            run(&mut session, stdin.lock(), stdout.lock(), interactive, cli.json)
        }
    }
    .context("Session aborted")?;

    let dept = session.department();
    info!(
        waiting = dept.total_waiting(),
        served = dept.total_students_ever_served(),
        calls = dept.total_service_count(),
        "Session closed"
    );

    Ok(())
}

/// Feed every line of `reader` to the session, writing one rendered response per command.
/// Parse failures are reported as `Response::Invalid` and the session carries on.
fn run(
    session: &mut Session,
    reader: impl BufRead,
    mut out: impl Write,
    interactive: bool,
    json: bool,
) -> sisfila_core::Result<()> {
    if interactive {
        prompt(&mut out)?;
    }

    for line in reader.lines() {
        let line = line?;

        let response = match parse_line(&line) {
            Ok(Some(command)) => Some(session.execute(command)),
            Ok(None) => None,
            Err(AppError::Parse(message)) => Some(Response::invalid(message)),
            Err(e) => return Err(e),
        };

        if let Some(response) = response {
            writeln!(out, "{}", output::render(&response, json)?)?;
            if response.is_quit() {
                return Ok(());
            }
        }

        if interactive {
            prompt(&mut out)?;
        }
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()
}
