//! Terminal front end for the to-do list.
//!
//! # Responsibility
//! - Own the session's single `TodoStore` and pass it into core flows.
//! - Read one command per stdin line until `quit` or end of input.

mod options;
mod session;

use chrono::Local;
use log::{error, info};
use clap::Parser;
use options::CliOptions;
use session::{execute, Outcome};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use todo_core::{init_logging, sample_items, TodoStore};

fn main() -> ExitCode {
    let options = CliOptions::parse();

    if let Some(log_dir) = options.log_dir.as_deref() {
        if let Err(err) = init_logging(&options.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_end module=cli status=error error={err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CliOptions) -> io::Result<()> {
    let mut store = if options.seed_samples() {
        TodoStore::with_items(sample_items())
    } else {
        TodoStore::new()
    };
    info!(
        "event=session_start module=cli status=ok items={}",
        store.count()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match execute(&mut store, &line, Local::now().date_naive()) {
            Ok(Outcome::Output(text)) if !text.is_empty() => writeln!(stdout, "{text}")?,
            Ok(Outcome::Output(_)) => {}
            Ok(Outcome::Quit) => break,
            Err(err) => eprintln!("error: {err}"),
        }
        prompt(&mut stdout)?;
    }

    info!(
        "event=session_end module=cli status=ok items={}",
        store.count()
    );
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "todo> ")?;
    stdout.flush()
}
