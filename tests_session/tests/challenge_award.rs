//! Challenge Award Tests
//!
//! Validates the completion state machine and its effects on the
//! injected progress store: pay once, persist once, never twice.

use challenges::ChallengeStatus;
use term_core::SessionOutcome;
use tests_session::{boot_challenge_session, boot_session, run_and_capture, type_line};

const WINNING_COMMAND: &str = "docker run -p 80:80 nginx";

/// Test: completing the challenge pays exactly once
///
/// Validates that repeating the winning command re-runs the container
/// but never re-awards, re-records or re-persists.
#[test]
fn test_award_is_idempotent_within_a_session() {
    let (mut session, progress) = boot_challenge_session("docker-basic");

    let first = run_and_capture(&mut session, WINNING_COMMAND);
    assert!(first.iter().any(|line| line.contains("+100 puntos")));

    let second = run_and_capture(&mut session, WINNING_COMMAND);
    assert!(second.iter().any(|line| line.contains("http://localhost:80")));
    assert!(!second.iter().any(|line| line.contains("puntos")));

    assert_eq!(progress.score(), 100);
    assert_eq!(progress.completed().len(), 1);
    assert_eq!(progress.persist_calls(), 1);
    assert_eq!(session.challenge_status(), ChallengeStatus::Completed);
}

/// Test: winning tokens match in any order
#[test]
fn test_winning_tokens_any_order() {
    let (mut session, progress) = boot_challenge_session("docker-basic");
    run_and_capture(&mut session, "docker run nginx -p 80:80");
    assert_eq!(progress.score(), 100);
}

/// Test: near misses leave the challenge open
///
/// Validates that running nginx without the exact port mapping starts a
/// container but never completes the challenge.
#[test]
fn test_partial_invocations_do_not_complete() {
    let (mut session, progress) = boot_challenge_session("docker-basic");

    let unmapped = run_and_capture(&mut session, "docker run nginx");
    assert!(unmapped
        .iter()
        .any(|line| line.starts_with("NOTA: No has mapeado los puertos.")));

    run_and_capture(&mut session, "docker run -p 8080:80 nginx");

    assert_eq!(session.challenge_status(), ChallengeStatus::Active);
    assert_eq!(progress.score(), 0);
    assert_eq!(progress.persist_calls(), 0);
}

/// Test: success without an active challenge scores nothing
#[test]
fn test_success_without_challenge_is_silent() {
    let (mut session, progress) = boot_session();

    let lines = run_and_capture(&mut session, WINNING_COMMAND);
    assert!(lines.iter().any(|line| line.contains("http://localhost:80")));
    assert!(!lines.iter().any(|line| line.contains("Felicidades")));
    assert_eq!(progress.score(), 0);
}

/// Test: unknown challenge ids leave the tracker inactive
///
/// Validates that a bad id degrades to a challenge-free session where
/// `challenge` reports there is nothing active.
#[test]
fn test_unknown_challenge_id_stays_inactive() {
    let (mut session, _) = boot_challenge_session("terraform-avanzado");
    assert_eq!(session.challenge_status(), ChallengeStatus::Inactive);

    let lines = run_and_capture(&mut session, "challenge");
    assert_eq!(lines[1], "No hay ningún desafío activo actualmente.");
}

/// Test: ps shows the running container only after completion
#[test]
fn test_ps_table_populates_only_after_completion() {
    let (mut session, _) = boot_challenge_session("docker-basic");

    let before = run_and_capture(&mut session, "docker ps");
    assert_eq!(before.len(), 3);
    assert_eq!(
        before[1],
        "CONTAINER ID   IMAGE     COMMAND   CREATED   STATUS    PORTS     NAMES"
    );

    run_and_capture(&mut session, WINNING_COMMAND);

    let after = run_and_capture(&mut session, "docker ps");
    assert_eq!(after.len(), 4);
    assert!(after[2].starts_with("abc123def456   nginx"));
    assert!(after[2].contains("0.0.0.0:80->80/tcp"));
}

/// Test: the exit outcome carries the completion flag both ways
#[test]
fn test_exit_outcome_carries_completion() {
    let (mut incomplete, _) = boot_challenge_session("docker-basic");
    assert_eq!(
        type_line(&mut incomplete, "exit"),
        SessionOutcome::ExitRequested {
            challenge_completed: false
        }
    );

    let (mut complete, _) = boot_challenge_session("docker-basic");
    type_line(&mut complete, WINNING_COMMAND);
    assert_eq!(
        type_line(&mut complete, "exit"),
        SessionOutcome::ExitRequested {
            challenge_completed: true
        }
    );
}
