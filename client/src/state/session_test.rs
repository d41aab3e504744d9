use super::*;
use crate::net::types::test_helpers::{randy_horton, session_info};

// =============================================================================
// Initial state
// =============================================================================

#[test]
fn fresh_state_is_logged_out() {
    let state = SessionState::new();
    assert!(!state.is_logged_in());
    assert!(state.session_information().is_none());
    assert_eq!(state.user_id(), None);
    assert!(!state.is_admin());
    assert_eq!(state.token(), None);
}

#[test]
fn fresh_subscriber_receives_false_first() {
    let state = SessionState::new();
    let mut stream = state.subscribe();
    assert_eq!(stream.drain(), vec![false]);
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn log_in_sets_flag_and_emits_true() {
    let state = SessionState::new();
    let mut stream = state.subscribe();
    assert_eq!(stream.try_next(), Some(false));

    state.log_in(randy_horton());

    assert!(state.is_logged_in());
    assert_eq!(state.session_information(), Some(randy_horton()));
    assert_eq!(stream.try_next(), Some(true));
    assert_eq!(stream.try_next(), None);
}

#[test]
fn log_in_exposes_identity_helpers() {
    let state = SessionState::new();
    state.log_in(randy_horton());
    assert_eq!(state.user_id(), Some(1));
    assert!(state.is_admin());
    assert_eq!(state.token().as_deref(), Some("jwt"));
}

#[test]
fn sequence_ending_in_log_out_is_logged_out() {
    let state = SessionState::new();
    state.log_in(session_info(3, false));
    state.log_out();
    state.log_in(session_info(4, true));
    state.log_out();
    assert!(!state.is_logged_in());
}

#[test]
fn late_subscriber_replays_true() {
    let state = SessionState::new();
    state.log_in(randy_horton());

    let mut stream = state.subscribe();
    assert_eq!(stream.drain(), vec![true]);
}

#[test]
fn emissions_follow_call_order() {
    let state = SessionState::new();
    let mut stream = state.subscribe();

    state.log_in(randy_horton());
    assert_eq!(stream.drain(), vec![false, true]);

    state.log_out();
    assert!(!state.is_logged_in());

    let mut all = vec![false, true];
    all.extend(stream.drain());
    assert_eq!(all, vec![false, true, false]);
}

#[test]
fn repeated_log_out_emits_each_time() {
    let state = SessionState::new();
    let mut stream = state.subscribe();
    assert_eq!(stream.try_next(), Some(false));

    state.log_out();
    assert!(!state.is_logged_in());
    state.log_out();
    assert!(!state.is_logged_in());

    assert_eq!(stream.drain(), vec![false, false]);
}

#[test]
fn log_out_clears_information() {
    let state = SessionState::new();
    state.log_in(randy_horton());
    state.log_out();
    assert!(state.session_information().is_none());
    assert_eq!(state.user_id(), None);
}

#[test]
fn second_log_in_replaces_record() {
    let state = SessionState::new();
    state.log_in(randy_horton());
    state.log_in(session_info(42, false));
    assert_eq!(state.user_id(), Some(42));
    assert!(!state.is_admin());
}

// =============================================================================
// Handles and subscribers
// =============================================================================

#[test]
fn clones_share_state() {
    let state = SessionState::new();
    let other = state.clone();
    let mut stream = other.subscribe();

    state.log_in(randy_horton());

    assert!(other.is_logged_in());
    assert_eq!(stream.drain(), vec![false, true]);
}

#[test]
fn subscribers_are_independent() {
    let state = SessionState::new();
    let mut first = state.subscribe();
    state.log_in(randy_horton());
    let mut second = state.subscribe();
    state.log_out();

    assert_eq!(first.drain(), vec![false, true, false]);
    assert_eq!(second.drain(), vec![true, false]);
}

#[test]
fn dropped_subscriber_is_pruned() {
    let state = SessionState::new();
    let dropped = state.subscribe();
    let mut kept = state.subscribe();
    drop(dropped);

    state.log_in(randy_horton());

    assert_eq!(kept.drain(), vec![false, true]);
    assert!(format!("{state:?}").contains("subscribers: 1"));
}

#[tokio::test]
async fn next_awaits_emissions() {
    let state = SessionState::new();
    let mut stream = state.subscribe();
    assert_eq!(stream.next().await, Some(false));

    let writer = state.clone();
    tokio::spawn(async move { writer.log_in(randy_horton()) }).await.unwrap();

    assert_eq!(stream.next().await, Some(true));
}

#[tokio::test]
async fn next_ends_when_all_handles_dropped() {
    let state = SessionState::new();
    let mut stream = state.subscribe();
    drop(state);
    assert_eq!(stream.next().await, Some(false));
    assert_eq!(stream.next().await, None);
}
