//! Round controller: applies one player action to every secret at once.
//!
//! A [`GameSession`] owns an ordered set of [`SecretTitle`] boards plus the
//! session bookkeeping (reveal log, round counter, elapsed time, lifecycle
//! phase). Each accepted token is interpreted once, fanned out to the
//! boards where applicable, and aggregated into a single [`SessionUpdate`]
//! for the caller to render.

use std::fmt;
use std::time::{Duration, Instant};

use tui_reveal_types::{Command, RevealOutcome, MIN_SECRETS, SPACE_TOKEN};

use crate::secret::{fold, SecretTitle};

/// Session construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Fewer than [`MIN_SECRETS`] titles were supplied.
    NotEnoughTitles(usize),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotEnoughTitles(got) => write!(
                f,
                "at least {MIN_SECRETS} secret titles are required to start a session (got {got})"
            ),
        }
    }
}

impl std::error::Error for SessionError {}

/// Session lifecycle phase.
///
/// `Finished` and `Quit` are terminal; there are no transitions out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Finished,
    Quit,
}

/// Result of applying one player token.
#[derive(Debug, Clone)]
pub struct SessionUpdate {
    /// Per-secret outcomes, in board order. Present only for letter guesses.
    pub outcomes: Option<Vec<RevealOutcome>>,
    pub finished: bool,
    pub quit: bool,
    /// Round count to report for this update. When this very update finished
    /// the session, the increment that detected completion is not counted
    /// as a played round.
    pub round: u32,
    pub elapsed: Duration,
    /// Player-facing feedback for irregular input, if any.
    pub message: Option<String>,
}

/// One secret's display state, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretView {
    /// Zero-based board index.
    pub index: usize,
    pub text: String,
    pub complete: bool,
}

/// One guessing session over a fixed set of secret titles.
#[derive(Debug, Clone)]
pub struct GameSession {
    secrets: Vec<SecretTitle>,
    /// Insertion-ordered, deduplicated display tokens of acted-on letters.
    reveal_log: Vec<String>,
    /// Current round number; starts at 1 and advances once per accepted
    /// action other than quit, whether or not the action changed anything.
    round: u32,
    phase: Phase,
    started_at: Instant,
    /// Set exactly once, on the transition into a terminal phase.
    frozen_elapsed: Option<Duration>,
}

impl GameSession {
    /// Start a new session over the given titles.
    ///
    /// Fails if fewer than [`MIN_SECRETS`] titles are supplied; a session
    /// over a single board is not a guessing game worth hosting.
    pub fn new<I, S>(titles: I, reveal_spaces: bool) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let secrets: Vec<SecretTitle> = titles
            .into_iter()
            .map(|title| SecretTitle::new(title.as_ref(), reveal_spaces))
            .collect();
        if secrets.len() < MIN_SECRETS {
            return Err(SessionError::NotEnoughTitles(secrets.len()));
        }
        Ok(Self {
            secrets,
            reveal_log: Vec::new(),
            round: 1,
            phase: Phase::InProgress,
            started_at: Instant::now(),
            frozen_elapsed: None,
        })
    }

    /// Interpret and apply one raw player token.
    ///
    /// Every token other than the quit command consumes a round, including
    /// empty input, over-long input, and letters absent from every title:
    /// the counter measures attempts, not successful reveals.
    pub fn apply_action(&mut self, token: &str) -> SessionUpdate {
        // Terminal phases are absorbing; late calls report state unchanged.
        if self.phase != Phase::InProgress {
            return self.make_update(None, None);
        }

        match Command::parse(token) {
            Command::Quit => {
                self.enter_phase(Phase::Quit);
                self.make_update(None, None)
            }
            Command::Solve(n) => {
                self.round += 1;
                if (1..=self.secrets.len()).contains(&n) {
                    self.secrets[n - 1].force_complete();
                    self.make_update(None, None)
                } else {
                    let message = format!(
                        "no board numbered {n}; pick a number from 1 to {}",
                        self.secrets.len()
                    );
                    self.make_update(None, Some(message))
                }
            }
            Command::Invalid => {
                self.round += 1;
                let message = "only a single character, :d <num> or :q is accepted".to_string();
                self.make_update(None, Some(message))
            }
            Command::Noop => {
                self.round += 1;
                self.make_update(None, None)
            }
            Command::Guess(letter) => {
                self.round += 1;
                self.guess(letter)
            }
        }
    }

    /// Fan one letter guess out to every board and aggregate the outcomes.
    fn guess(&mut self, letter: char) -> SessionUpdate {
        let outcomes: Vec<RevealOutcome> = self
            .secrets
            .iter_mut()
            .map(|secret| secret.reveal(letter))
            .collect();

        if outcomes.iter().all(|&o| o == RevealOutcome::AlreadyComplete) {
            // Every board was complete before this guess: the session is
            // over, and this attempt is not counted as a played round.
            self.enter_phase(Phase::Finished);
            return self.make_update(Some(outcomes), None);
        }

        let any_success = outcomes.iter().any(|&o| o == RevealOutcome::Success);
        let any_missing = outcomes.iter().any(|&o| o == RevealOutcome::NotInTitle);
        if !any_success && any_missing {
            let message = format!("'{}' is not in any title", display_token(letter));
            return self.make_update(Some(outcomes), Some(message));
        }

        let token = display_token(letter);
        if !self.reveal_log.contains(&token) {
            self.reveal_log.push(token);
        }
        self.make_update(Some(outcomes), None)
    }

    /// Display states of all boards, in order.
    pub fn views(&self) -> Vec<SecretView> {
        self.secrets
            .iter()
            .enumerate()
            .map(|(index, secret)| SecretView {
                index,
                text: secret.rendered(),
                complete: secret.is_complete(),
            })
            .collect()
    }

    pub fn secrets(&self) -> &[SecretTitle] {
        &self.secrets
    }

    /// Display tokens of every letter acted on so far, in first-use order.
    pub fn reveal_log(&self) -> &[String] {
        &self.reveal_log
    }

    /// Current round number (the round about to be played).
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Wall-clock time since construction, frozen once a terminal phase
    /// is reached.
    pub fn elapsed(&self) -> Duration {
        self.frozen_elapsed
            .unwrap_or_else(|| self.started_at.elapsed())
    }

    fn enter_phase(&mut self, phase: Phase) {
        self.phase = phase;
        if self.frozen_elapsed.is_none() {
            self.frozen_elapsed = Some(self.started_at.elapsed());
        }
    }

    fn make_update(&self, outcomes: Option<Vec<RevealOutcome>>, message: Option<String>) -> SessionUpdate {
        let finished = self.phase == Phase::Finished;
        SessionUpdate {
            outcomes,
            finished,
            quit: self.phase == Phase::Quit,
            round: if finished { self.round - 1 } else { self.round },
            elapsed: self.elapsed(),
            message,
        }
    }
}

/// Human-readable token for a guessed character; a space would be invisible
/// in the reveal log, so it gets a named stand-in.
fn display_token(letter: char) -> String {
    match fold(letter) {
        ' ' => SPACE_TOKEN.to_string(),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(titles: &[&str]) -> GameSession {
        GameSession::new(titles, false).expect("enough titles")
    }

    #[test]
    fn rejects_fewer_than_two_titles() {
        let err = GameSession::new(["AB"], false).unwrap_err();
        assert_eq!(err, SessionError::NotEnoughTitles(1));
        assert!(GameSession::new(["A", "B"], false).is_ok());
    }

    #[test]
    fn guess_fans_out_in_board_order() {
        let mut s = session(&["Cat", "Dog"]);
        let update = s.apply_action("c");
        assert_eq!(
            update.outcomes,
            Some(vec![RevealOutcome::Success, RevealOutcome::NotInTitle])
        );
        assert_eq!(update.round, 2);
    }

    #[test]
    fn every_non_quit_action_consumes_a_round() {
        let mut s = session(&["Cat", "Dog"]);
        s.apply_action("");
        s.apply_action("toolong");
        s.apply_action("z");
        s.apply_action(":d 9");
        assert_eq!(s.round(), 5);
    }

    #[test]
    fn quit_does_not_consume_a_round() {
        let mut s = session(&["Cat", "Dog"]);
        let update = s.apply_action(":q");
        assert!(update.quit);
        assert_eq!(s.round(), 1);
        assert_eq!(s.phase(), Phase::Quit);
    }

    #[test]
    fn solve_out_of_range_leaves_boards_untouched() {
        let mut s = session(&["Cat", "Dog"]);
        let update = s.apply_action(":d 3");
        assert!(update.message.is_some());
        assert!(s.views().iter().all(|v| !v.complete));
    }

    #[test]
    fn missing_letter_is_reported_and_not_logged() {
        let mut s = session(&["Cat", "Dog"]);
        let update = s.apply_action("z");
        assert!(update.message.is_some());
        assert!(s.reveal_log().is_empty());
    }

    #[test]
    fn space_is_logged_with_a_named_token() {
        let mut s = session(&["A B", "C D"]);
        s.apply_action(" ");
        assert_eq!(s.reveal_log(), [SPACE_TOKEN.to_string()]);
    }

    #[test]
    fn terminal_phase_absorbs_later_actions() {
        let mut s = session(&["Cat", "Dog"]);
        s.apply_action(":q");
        let update = s.apply_action("c");
        assert!(update.quit);
        assert_eq!(update.outcomes, None);
        assert_eq!(s.round(), 1);
    }
}
