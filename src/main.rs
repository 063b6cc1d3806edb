mod config;
mod export;
mod import;
mod ledger;
mod models;
mod run;
mod session;
mod summary;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    // Bare invocation, or only options, starts the interactive session.
    match run::command_position(&args) {
        None => run_tui(&args),
        Some(_) => run::as_cli(&args),
    }
}

fn run_tui(args: &[String]) -> Result<()> {
    let (session, source) = run::open_session(args)?;
    run::as_tui(session, source)
}
