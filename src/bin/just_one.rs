//! Terminal entry point.
//!
//! Loads the bundled cards, asks for five player names, plays the advanced
//! game to the end and prints the final scores. Exits with 1 when the card
//! source is missing or unusable.

use std::process::ExitCode;

use just_one::cards::{load_from_path, locate_card_source};
use just_one::io::{Console, FileProposalLog, TerminalConsole, DEFAULT_LOG_PATH};
use just_one::{setup_roster, GameError, GameSession, SessionConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Quiet by default so log output doesn't interleave with prompts.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "session aborted");
            match &e {
                GameError::Load(_) => eprintln!("Error loading cards: {e}"),
                _ => eprintln!("Error: {e}"),
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<(), GameError> {
    let mut console = TerminalConsole::new();
    console.show("Welcome to 'Just One'!")?;

    let path = locate_card_source()?;
    let catalog = load_from_path(&path)?;

    let config = SessionConfig::advanced();
    let log = FileProposalLog::create(DEFAULT_LOG_PATH)?;
    let roster = setup_roster(&mut console, config.player_count)?;

    let mut session = GameSession::new(config, &catalog, roster, &mut console, log)?;
    session.run()?;
    let (_, log) = session.into_parts();

    console.show("")?;
    console.show("Thank you for playing 'Just One'!")?;
    console.show(&format!(
        "All proposals have been saved to '{}'.",
        log.path().display()
    ))?;
    Ok(())
}
