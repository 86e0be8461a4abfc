//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Placeholder glyph shown for an undisclosed mask slot.
pub const HIDDEN_GLYPH: char = '?';

/// Display token logged when the guessed character is a space.
pub const SPACE_TOKEN: &str = "<space>";

/// Minimum number of secret titles required to start a session.
pub const MIN_SECRETS: usize = 2;

/// Per-secret result of revealing one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealOutcome {
    /// The letter does not occur anywhere in the title.
    NotInTitle,
    /// The letter occurs and every occurrence was just disclosed.
    Success,
    /// The letter had already been disclosed earlier.
    AlreadyRevealed,
    /// The whole title was already disclosed before this guess.
    AlreadyComplete,
}

/// One parsed player token for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Single-character letter guess, fanned out to every secret.
    Guess(char),
    /// Force-complete one secret by its 1-based board number.
    Solve(usize),
    /// End the session immediately.
    Quit,
    /// Empty input; consumes the round without touching any secret.
    Noop,
    /// Anything else (multi-character token, malformed solve target).
    Invalid,
}

impl Command {
    /// Parse one raw input token.
    ///
    /// Commands are matched case-insensitively. The token is never trimmed:
    /// a lone space is a legitimate letter guess, not blank input. Guesses
    /// keep the raw character; case folding happens in the reveal logic.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();

        if let Some(rest) = lowered.strip_prefix(":d ") {
            // An unsigned parse alone admits "0"; board numbers start at 1,
            // so sub-1 targets must be rejected explicitly. The upper bound
            // is checked by the session, which owns the board count.
            return match rest.split(' ').next().and_then(|s| s.parse::<usize>().ok()) {
                Some(n) if n >= 1 => Command::Solve(n),
                _ => Command::Invalid,
            };
        }
        if lowered == ":q" {
            return Command::Quit;
        }

        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Command::Noop,
            (Some(c), None) => Command::Guess(c),
            _ => Command::Invalid,
        }
    }
}
