//! Integration tests for the round controller: one player action per round,
//! fanned out to every board and aggregated into a session-level outcome.

use tui_reveal::core::{GameSession, Phase, SessionError};
use tui_reveal::types::RevealOutcome;

fn texts(session: &GameSession) -> Vec<String> {
    session.views().into_iter().map(|view| view.text).collect()
}

#[test]
fn scenario_first_guess_fans_out() {
    let mut session = GameSession::new(["Cat", "Dog"], false).unwrap();
    assert_eq!(texts(&session), ["???", "???"]);

    let update = session.apply_action("c");
    assert_eq!(
        update.outcomes,
        Some(vec![RevealOutcome::Success, RevealOutcome::NotInTitle])
    );
    assert_eq!(texts(&session), ["c??", "???"]);
    assert_eq!(update.round, 2);
    assert!(!update.finished);
}

#[test]
fn scenario_completed_board_restores_casing_and_session_continues() {
    let mut session = GameSession::new(["Cat", "Dog"], false).unwrap();
    session.apply_action("c");
    session.apply_action("a");
    session.apply_action("t");
    assert_eq!(texts(&session)[0], "Cat");
    assert!(session.views()[0].complete);
    assert!(!session.views()[1].complete);

    // A repeat guess sees the first board complete and the second missing
    // the letter; only one board is complete, so the session continues.
    let update = session.apply_action("t");
    assert_eq!(update.outcomes.as_deref().unwrap()[0], RevealOutcome::AlreadyComplete);
    assert!(!update.finished);
    assert!(update.message.is_some());

    // A guess that still succeeds on the open board is logged even though
    // the completed board reports AlreadyComplete.
    let update = session.apply_action("o");
    assert_eq!(
        update.outcomes,
        Some(vec![RevealOutcome::AlreadyComplete, RevealOutcome::Success])
    );
    assert!(!update.finished);
    assert!(session.reveal_log().contains(&"o".to_string()));
}

#[test]
fn scenario_single_title_is_rejected() {
    let err = GameSession::new(["AB"], false).unwrap_err();
    assert_eq!(err, SessionError::NotEnoughTitles(1));
}

#[test]
fn scenario_pre_revealed_spaces() {
    let session = GameSession::new(["Ab C", "Xy Z"], true).unwrap();
    assert_eq!(texts(&session), ["?? ?", "?? ?"]);
}

#[test]
fn scenario_all_complete_finishes_with_compensated_round_count() {
    let mut session = GameSession::new(["Cat", "Dog"], false).unwrap();
    session.apply_action(":d 1");
    session.apply_action(":d 2");
    assert!(session.views().iter().all(|view| view.complete));
    assert_eq!(session.round(), 3);

    let update = session.apply_action("z");
    assert_eq!(
        update.outcomes,
        Some(vec![
            RevealOutcome::AlreadyComplete,
            RevealOutcome::AlreadyComplete
        ])
    );
    assert!(update.finished);
    assert_eq!(session.phase(), Phase::Finished);
    // The attempt that detected completion is not a played round.
    assert_eq!(update.round, 3);
}

#[test]
fn scenario_solve_bounds_are_validated() {
    let mut session = GameSession::new(["One", "Two", "Six"], false).unwrap();

    // In range: 1-based index 2 completes the second board.
    session.apply_action(":d 2");
    assert_eq!(texts(&session), ["???", "Two", "???"]);

    // Above the board count: rejected without mutation.
    let update = session.apply_action(":d 4");
    assert!(update.message.is_some());
    assert_eq!(texts(&session), ["???", "Two", "???"]);

    // "0" parses as an unsigned integer but is not a board number.
    let update = session.apply_action(":d 0");
    assert!(update.message.is_some());
    assert_eq!(texts(&session), ["???", "Two", "???"]);
}

#[test]
fn round_counter_measures_attempts_not_reveals() {
    let mut session = GameSession::new(["Cat", "Dog"], false).unwrap();
    session.apply_action("c"); // success
    session.apply_action("z"); // not in any title
    session.apply_action(""); // empty
    session.apply_action("too long"); // invalid
    session.apply_action(":d 7"); // out of range
    assert_eq!(session.round(), 6);
}

#[test]
fn quit_ends_without_consuming_a_round() {
    let mut session = GameSession::new(["Cat", "Dog"], false).unwrap();
    session.apply_action("c");
    let update = session.apply_action(":q");
    assert!(update.quit);
    assert!(!update.finished);
    assert_eq!(session.phase(), Phase::Quit);
    assert_eq!(session.round(), 2);
}

#[test]
fn missing_letter_is_not_logged() {
    let mut session = GameSession::new(["Cat", "Dog"], false).unwrap();
    let update = session.apply_action("z");
    assert_eq!(
        update.outcomes,
        Some(vec![
            RevealOutcome::NotInTitle,
            RevealOutcome::NotInTitle
        ])
    );
    assert!(update.message.is_some());
    assert!(session.reveal_log().is_empty());
}

#[test]
fn reveal_log_deduplicates_and_keeps_first_use_order() {
    let mut session = GameSession::new(["Banana", "Cabana"], false).unwrap();
    session.apply_action("a");
    session.apply_action("n");
    session.apply_action("a"); // AlreadyRevealed everywhere, still logged path
    assert_eq!(session.reveal_log(), ["a".to_string(), "n".to_string()]);
}

#[test]
fn uppercase_guess_reveals_lowercase() {
    let mut session = GameSession::new(["Cat", "Cot"], false).unwrap();
    session.apply_action("C");
    assert_eq!(texts(&session), ["c??", "c??"]);
    assert_eq!(session.reveal_log(), ["c".to_string()]);
}

#[test]
fn elapsed_freezes_once_finished() {
    let mut session = GameSession::new(["Hi", "Ho"], false).unwrap();
    session.apply_action(":d 1");
    session.apply_action(":d 2");
    let update = session.apply_action("x");
    assert!(update.finished);

    let frozen = session.elapsed();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert_eq!(session.elapsed(), frozen);
}

#[test]
fn terminal_phases_are_absorbing() {
    let mut session = GameSession::new(["Hi", "Ho"], false).unwrap();
    session.apply_action(":d 1");
    session.apply_action(":d 2");
    session.apply_action("x");
    let round_at_finish = session.round();

    // Further actions change nothing, not even the round counter.
    let update = session.apply_action("h");
    assert!(update.finished);
    assert_eq!(update.outcomes, None);
    assert_eq!(session.round(), round_at_finish);
    assert_eq!(session.phase(), Phase::Finished);
}
