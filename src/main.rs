//! Terminal runner for the title-reveal guessing game (default binary).
//!
//! This is the thin shell around the core: it collects the session setup,
//! then loops one prompt per round, feeding raw tokens into the session
//! and rendering the returned state.

use anyhow::{bail, Result};

use tui_reveal::core::{GameSession, SessionUpdate};
use tui_reveal::input::{confirm, read_line, wait_any_key};
use tui_reveal::term::Screen;
use tui_reveal::types::MIN_SECRETS;

const USAGE: &str = "tui-reveal hosts a guessing game where hidden titles are \
uncovered one character per round across all boards at once.

Usage: tui-reveal [options]

Options:
  --help          Show this help message and exit.
  <no options>    Start a game session.";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help") {
        println!("{USAGE}");
        return Ok(());
    }
    if let Some(unknown) = args.first() {
        eprintln!("Unknown argument: {unknown}.\nUse tui-reveal --help to show the help message.");
        std::process::exit(2);
    }

    run()
}

fn run() -> Result<()> {
    let mut screen = Screen::new();
    screen.set_title("tui-reveal - guess the hidden titles from revealed characters")?;
    screen.clear()?;
    screen.line("Welcome to tui-reveal, a host tool for the guess-the-title game.")?;

    let reveal_spaces = confirm(
        "Reveal spaces initially? This can only be set before the session starts. (y/N) ",
        false,
    )?;

    screen.line("Enter the secret titles, one per line. A blank line or EOF starts the session:")?;
    let titles = read_titles()?;

    let show_answers = confirm(
        "Show the correct answers every round (host/backend mode)? (Y/n) ",
        true,
    )?;

    // read_titles enforces the minimum, so this only fails on a logic error.
    let session = GameSession::new(&titles, reveal_spaces)?;

    screen.line("Secret titles for this session:")?;
    for (i, title) in titles.iter().enumerate() {
        screen.line(&format!("[{}] {}", i + 1, title))?;
    }
    screen.line("Initial board state:")?;
    for view in session.views() {
        screen.line(&format!("[{}] {}", view.index + 1, view.text))?;
    }
    screen.line(&format!(
        "If this looks right, press any key to start. ({} titles)",
        titles.len()
    ))?;
    wait_any_key()?;

    game_loop(screen, session, show_answers)
}

/// Collect titles until a blank line, a literal `eof`, or actual EOF,
/// re-prompting while fewer than the required minimum have been entered.
fn read_titles() -> Result<Vec<String>> {
    let mut titles: Vec<String> = Vec::new();
    loop {
        let line = match read_line("")? {
            Some(line) => line,
            None => {
                if titles.len() < MIN_SECRETS {
                    bail!("at least {MIN_SECRETS} titles are required to start a session");
                }
                return Ok(titles);
            }
        };
        if line.trim().is_empty() || line.trim().eq_ignore_ascii_case("eof") {
            if titles.len() < MIN_SECRETS {
                eprintln!("Please enter at least {MIN_SECRETS} titles to start the session.");
                continue;
            }
            return Ok(titles);
        }
        titles.push(line);
    }
}

fn game_loop(mut screen: Screen, mut session: GameSession, show_answers: bool) -> Result<()> {
    let mut last: Option<SessionUpdate> = None;
    loop {
        screen.clear()?;
        let finished = last.as_ref().is_some_and(|update| update.finished);
        if finished {
            screen.set_title("tui-reveal - Final")?;
        } else {
            screen.set_title(&format!("tui-reveal - Round {}", session.round()))?;
        }

        screen.reveal_log(&session)?;
        screen.boards(&session)?;

        if let Some(update) = last.as_ref().filter(|update| update.finished) {
            screen.stats(update.round, update.elapsed)?;
            wait_any_key()?;
            return Ok(());
        }

        if show_answers {
            screen.answers(&session)?;
        }
        screen.menu()?;

        // EOF on the round prompt quits the session.
        let token = read_line("Input: ")?.unwrap_or_else(|| ":q".to_string());
        let update = session.apply_action(&token);
        if update.quit {
            screen.line("Session quit.")?;
            return Ok(());
        }
        if let Some(message) = &update.message {
            screen.message(&format!("{message}. Any key to continue."))?;
            wait_any_key()?;
        }
        last = Some(update);
    }
}
