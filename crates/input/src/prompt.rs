//! Line-oriented console prompts for session setup and the round loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

/// Print `prompt` (no newline) and read one line from stdin.
///
/// Returns `None` on EOF. Only the trailing line break is stripped;
/// interior and leading spaces are preserved because a lone space can be
/// a meaningful guess.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Ask a yes/no question.
///
/// `default` is returned on empty, unrecognized, or EOF input, so prompts
/// can phrase themselves as `(y/N)` or `(Y/n)`.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let answer = read_line(prompt)?.unwrap_or_default();
    Ok(match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}

/// Block until any key is pressed, without echoing it.
///
/// Raw mode is enabled only for the duration of the wait so the
/// surrounding line-based prompts keep normal terminal behavior.
pub fn wait_any_key() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(err) => break Err(err.into()),
        }
    };
    terminal::disable_raw_mode()?;
    result
}
