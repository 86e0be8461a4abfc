//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the complete rules of the title-reveal guessing
//! game. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same token sequence produces the same boards
//! - **Testable**: every rule is exercised without a terminal attached
//! - **Portable**: can run behind any shell (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`secret`]: per-title reveal state machine with case folding and the
//!   completion casing upgrade
//! - [`session`]: the round controller that fans one player action out to
//!   every board and aggregates the results
//!
//! # Game Rules
//!
//! A session hides at least two secret titles behind placeholder glyphs.
//! Each round the player submits one token:
//!
//! - a **single character** is guessed against every board at once;
//! - **`:d <num>`** force-completes one board (host convenience);
//! - **`:q`** ends the session immediately.
//!
//! Guessing a letter discloses all of its occurrences across all boards.
//! A completed board flips back to its original casing. Once a guess finds
//! every board already complete, the session finishes and the elapsed
//! clock freezes.
//!
//! # Example
//!
//! ```
//! use tui_reveal_core::GameSession;
//!
//! let mut session = GameSession::new(["Cat", "Dog"], false).unwrap();
//!
//! let update = session.apply_action("c");
//! assert_eq!(update.round, 2);
//!
//! session.apply_action("a");
//! session.apply_action("t");
//! assert_eq!(session.views()[0].text, "Cat");
//! ```

pub mod secret;
pub mod session;

pub use tui_reveal_types as types;

// Re-export commonly used types for convenience
pub use secret::{fold, SecretTitle};
pub use session::{GameSession, Phase, SecretView, SessionError, SessionUpdate};
