use session::{DEMO_ACCOUNTS, Role};

use super::*;

fn snapshot(status: Status) -> SessionSnapshot {
    SessionSnapshot { status, ..SessionSnapshot::default() }
}

// =============================================================
// should_redirect_to_login
// =============================================================

#[test]
fn no_redirect_before_hydration() {
    assert!(!should_redirect_to_login(false, &snapshot(Status::Idle)));
}

#[test]
fn redirect_when_hydrated_and_signed_out() {
    assert!(should_redirect_to_login(true, &snapshot(Status::Idle)));
    assert!(should_redirect_to_login(true, &snapshot(Status::Error)));
}

#[test]
fn no_redirect_while_loading_or_authenticated() {
    assert!(!should_redirect_to_login(true, &snapshot(Status::Loading)));
    let signed_in = SessionSnapshot {
        status: Status::Authenticated,
        user: Some(DEMO_ACCOUNTS[1].identity()),
        ..SessionSnapshot::default()
    };
    assert!(!should_redirect_to_login(true, &signed_in));
}

// =============================================================
// nav_label
// =============================================================

#[test]
fn nav_label_uses_first_name_and_role() {
    let user = DEMO_ACCOUNTS[1].identity();
    assert_eq!(user.role, Role::ClubAdmin);
    assert_eq!(nav_label(&user), "Tanvir · Club admin");
}

#[test]
fn nav_label_handles_blank_name() {
    let mut user = DEMO_ACCOUNTS[2].identity();
    user.name = String::new();
    assert_eq!(nav_label(&user), " · Member");
}
