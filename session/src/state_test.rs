use super::*;
use crate::identity::Role;

fn member() -> Identity {
    Identity {
        id: "u-3".to_owned(),
        name: "Nusrat Jahan".to_owned(),
        email: "student@buet.ac.bd".to_owned(),
        role: Role::Member,
        university: "BUET".to_owned(),
    }
}

fn loading(id: u64) -> SessionState {
    SessionState::Loading { request: RequestId(id) }
}

fn all_states() -> Vec<SessionState> {
    vec![
        SessionState::Idle,
        loading(1),
        SessionState::Authenticated(member()),
        SessionState::Error("nope".to_owned()),
    ]
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = SessionState::default();
    assert_eq!(state.status(), Status::Idle);
    assert!(state.current_user().is_none());
    assert!(state.last_error().is_none());
}

#[test]
fn user_present_only_when_authenticated() {
    for state in all_states() {
        assert_eq!(state.current_user().is_some(), state.status() == Status::Authenticated);
    }
}

#[test]
fn error_present_only_in_error_status() {
    for state in all_states() {
        assert_eq!(state.last_error().is_some(), state.status() == Status::Error);
    }
}

#[test]
fn status_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Status::Authenticated).expect("json"), "\"authenticated\"");
}

// =============================================================
// Sign-in transitions
// =============================================================

#[test]
fn start_from_any_state_enters_loading() {
    for state in all_states() {
        let next = reduce(&state, SessionAction::SignInStarted { request: RequestId(7) });
        assert_eq!(next, loading(7));
    }
}

#[test]
fn success_for_current_request_authenticates() {
    let next = reduce(&loading(2), SessionAction::SignInSucceeded { request: RequestId(2), user: member() });
    assert_eq!(next, SessionState::Authenticated(member()));
}

#[test]
fn failure_for_current_request_enters_error() {
    let next = reduce(
        &loading(2),
        SessionAction::SignInFailed { request: RequestId(2), message: "Invalid email or password.".to_owned() },
    );
    assert_eq!(next.status(), Status::Error);
    assert_eq!(next.last_error(), Some("Invalid email or password."));
}

#[test]
fn stale_completion_is_ignored() {
    let state = loading(3);
    let ok = reduce(&state, SessionAction::SignInSucceeded { request: RequestId(2), user: member() });
    let fail = reduce(&state, SessionAction::SignInFailed { request: RequestId(2), message: "x".to_owned() });
    assert_eq!(ok, state);
    assert_eq!(fail, state);
}

#[test]
fn completion_outside_loading_is_ignored() {
    for state in [SessionState::Idle, SessionState::Error("e".to_owned())] {
        let next = reduce(&state, SessionAction::SignInSucceeded { request: RequestId(1), user: member() });
        assert_eq!(next, state);
    }
}

// =============================================================
// Sign-out, hydration, dismiss
// =============================================================

#[test]
fn sign_out_from_any_state_is_idle() {
    for state in all_states() {
        assert_eq!(reduce(&state, SessionAction::SignedOut), SessionState::Idle);
    }
}

#[test]
fn hydrated_with_user_authenticates() {
    let next = reduce(&SessionState::Idle, SessionAction::Hydrated(Some(member())));
    assert_eq!(next.current_user(), Some(&member()));
}

#[test]
fn hydrated_without_user_is_idle() {
    let next = reduce(&SessionState::Authenticated(member()), SessionAction::Hydrated(None));
    assert_eq!(next, SessionState::Idle);
}

#[test]
fn dismiss_only_leaves_error() {
    assert_eq!(reduce(&SessionState::Error("e".to_owned()), SessionAction::ErrorDismissed), SessionState::Idle);
    for state in [SessionState::Idle, loading(1), SessionState::Authenticated(member())] {
        assert_eq!(reduce(&state, SessionAction::ErrorDismissed), state);
    }
}

#[test]
fn request_id_displays_with_hash() {
    assert_eq!(RequestId(12).to_string(), "#12");
}
