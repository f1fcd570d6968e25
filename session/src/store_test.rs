use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::*;
use crate::identity::Role;
use crate::storage::{MemoryStorage, TOKEN_KEY, USER_KEY};
use crate::transport::{DEMO_ACCOUNTS, MockTransport};

fn store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (SessionStore::new(storage.clone()), storage)
}

fn read(storage: &MemoryStorage, key: &str) -> Option<String> {
    storage.read(key).expect("memory storage read")
}

async fn signed_in() -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let (mut store, storage) = store();
    store
        .sign_in(&MockTransport::default(), "admin@du.ac.bd", "admin123")
        .await
        .expect("demo sign-in");
    (store, storage)
}

// =============================================================================
// sign_in
// =============================================================================

#[tokio::test]
async fn admin_credentials_authenticate_as_club_admin() {
    let (store, storage) = signed_in().await;
    assert_eq!(store.status(), Status::Authenticated);
    let user = store.current_user().expect("user");
    assert_eq!(user.role, Role::ClubAdmin);
    assert_eq!(user, &DEMO_ACCOUNTS[1].identity());
    assert!(store.last_error().is_none());
    assert!(!read(&storage, USER_KEY).unwrap_or_default().is_empty());
    assert!(!read(&storage, TOKEN_KEY).unwrap_or_default().is_empty());
}

#[tokio::test]
async fn every_demo_account_signs_in() {
    for account in DEMO_ACCOUNTS {
        let (mut store, _) = store();
        let user = store
            .sign_in(&MockTransport::default(), account.email, account.password)
            .await
            .expect("demo account");
        assert_eq!(user, account.identity());
        assert_eq!(store.current_user(), Some(&account.identity()));
    }
}

#[tokio::test]
async fn unknown_credentials_end_in_error_without_persisting() {
    let (mut store, storage) = store();
    let err = store
        .sign_in(&MockTransport::default(), "nobody@x.com", "wrong")
        .await
        .expect_err("not a demo account");
    assert!(matches!(err, SessionError::Authentication(_)));
    assert_eq!(store.status(), Status::Error);
    assert!(store.current_user().is_none());
    assert!(store.last_error().unwrap_or_default().to_lowercase().contains("invalid"));
    assert!(storage.is_empty());
}

#[tokio::test]
async fn wrong_password_for_demo_email_fails() {
    let (mut store, _) = store();
    let result = store.sign_in(&MockTransport::default(), "admin@du.ac.bd", "admin124").await;
    assert!(result.is_err());
    assert_eq!(store.status(), Status::Error);
}

#[tokio::test]
async fn empty_input_is_rejected_before_any_transition() {
    let (mut store, _) = store();
    let err = store.sign_in(&MockTransport::default(), "", "admin123").await.expect_err("empty email");
    assert!(matches!(err, SessionError::Validation(ValidationError::EmptyEmail)));
    let err = store.sign_in(&MockTransport::default(), "admin@du.ac.bd", "").await.expect_err("empty pw");
    assert!(matches!(err, SessionError::Validation(ValidationError::EmptyPassword)));
    assert_eq!(store.status(), Status::Idle);
    assert_eq!(store.revision(), 0);
}

#[tokio::test]
async fn retry_after_error_can_succeed() {
    let (mut store, _) = store();
    let transport = MockTransport::default();
    let _ = store.sign_in(&transport, "admin@du.ac.bd", "nope").await;
    assert_eq!(store.status(), Status::Error);
    store.sign_in(&transport, "admin@du.ac.bd", "admin123").await.expect("retry");
    assert_eq!(store.status(), Status::Authenticated);
    assert!(store.last_error().is_none());
}

#[tokio::test]
async fn failed_reauthentication_clears_the_previous_session() {
    let (mut store, storage) = signed_in().await;
    let err = store
        .sign_in(&MockTransport::default(), "nobody@x.com", "wrong")
        .await
        .expect_err("bad credentials");
    assert!(matches!(err, SessionError::Authentication(_)));
    assert_eq!(store.status(), Status::Error);
    assert!(store.current_user().is_none());
    assert_eq!(read(&storage, USER_KEY), None);
    assert_eq!(read(&storage, TOKEN_KEY), None);

    let mut reloaded = SessionStore::new(storage.clone());
    assert_eq!(reloaded.hydrate(), Status::Idle);
    assert!(reloaded.current_user().is_none());
}

#[test]
fn transport_failure_uses_generic_message() {
    let (mut store, storage) = store();
    let ticket = store.begin_sign_in("admin@du.ac.bd", "admin123").expect("valid");
    let err = store
        .complete_sign_in(ticket.request, Err(TransportError::Failed("offline".to_owned())))
        .expect_err("failed transport");
    assert!(matches!(err, SessionError::Authentication(ref m) if m == SIGN_IN_FAILED_MESSAGE));
    assert_eq!(store.last_error(), Some(SIGN_IN_FAILED_MESSAGE));
    assert!(storage.is_empty());
}

// =============================================================================
// Request fencing
// =============================================================================

#[test]
fn begin_sign_in_enters_loading() {
    let (mut store, _) = store();
    let ticket = store.begin_sign_in("admin@du.ac.bd", "admin123").expect("valid");
    assert!(store.is_loading());
    assert_eq!(store.state().in_flight(), Some(ticket.request));
    assert!(store.current_user().is_none());
}

#[test]
fn older_response_cannot_overwrite_newer_attempt() {
    let (mut store, storage) = store();
    let transport = MockTransport::default();
    let first = store.begin_sign_in("admin@du.ac.bd", "admin123").expect("valid");
    let second = store.begin_sign_in("nobody@x.com", "wrong").expect("valid");
    assert!(second.request > first.request);

    let second_result = transport.authenticate(&second.credentials);
    store.complete_sign_in(second.request, second_result).expect_err("rejected");
    assert_eq!(store.status(), Status::Error);

    let first_result = transport.authenticate(&first.credentials);
    let err = store.complete_sign_in(first.request, first_result).expect_err("stale");
    assert!(matches!(err, SessionError::Superseded(id) if id == first.request));
    assert_eq!(store.status(), Status::Error);
    assert!(storage.is_empty());
}

#[test]
fn response_after_sign_out_is_discarded() {
    let (mut store, storage) = store();
    let ticket = store.begin_sign_in("admin@du.ac.bd", "admin123").expect("valid");
    store.sign_out();
    let result = MockTransport::default().authenticate(&ticket.credentials);
    assert!(store.complete_sign_in(ticket.request, result).is_err());
    assert_eq!(store.status(), Status::Idle);
    assert!(storage.is_empty());
}

// =============================================================================
// sign_out
// =============================================================================

#[tokio::test]
async fn sign_out_clears_user_and_storage() {
    let (mut store, storage) = signed_in().await;
    store.sign_out();
    assert_eq!(store.status(), Status::Idle);
    assert!(store.current_user().is_none());
    assert!(storage.is_empty());
}

#[test]
fn sign_out_from_error_and_idle_is_idle() {
    let (mut store, storage) = store();
    store.sign_out();
    assert_eq!(store.status(), Status::Idle);

    let ticket = store.begin_sign_in("nobody@x.com", "wrong").expect("valid");
    let _ = store.complete_sign_in(ticket.request, Err(TransportError::InvalidCredentials));
    storage.write(USER_KEY, "leftover").expect("write");
    store.sign_out();
    assert_eq!(store.status(), Status::Idle);
    assert!(store.last_error().is_none());
    assert!(storage.is_empty());
}

// =============================================================================
// hydrate
// =============================================================================

#[test]
fn hydrate_with_nothing_persisted_is_idle() {
    let (mut store, _) = store();
    assert_eq!(store.hydrate(), Status::Idle);
    assert!(store.current_user().is_none());
}

#[test]
fn hydrate_with_malformed_blob_clears_it_and_is_idempotent() {
    let (mut store, storage) = store();
    storage.write(USER_KEY, "{not json").expect("write");
    storage.write(TOKEN_KEY, "demo.abc").expect("write");

    assert_eq!(store.hydrate(), Status::Idle);
    assert!(storage.is_empty());
    assert_eq!(store.hydrate(), Status::Idle);
    assert!(store.current_user().is_none());
}

#[test]
fn hydrate_without_token_is_treated_as_malformed() {
    let (mut store, storage) = store();
    let blob = serde_json::to_string(&DEMO_ACCOUNTS[2].identity()).expect("json");
    storage.write(USER_KEY, &blob).expect("write");
    assert_eq!(store.hydrate(), Status::Idle);
    assert!(storage.is_empty());
}

#[test]
fn hydrate_removes_orphaned_token() {
    let (mut store, storage) = store();
    storage.write(TOKEN_KEY, "demo.orphan").expect("write");
    assert_eq!(store.hydrate(), Status::Idle);
    assert!(storage.is_empty());
}

#[tokio::test]
async fn sign_in_then_hydrate_on_fresh_store_restores_user() {
    let (store, storage) = signed_in().await;
    let mut fresh = SessionStore::new(storage.clone());
    assert_eq!(fresh.hydrate(), Status::Authenticated);
    assert_eq!(fresh.current_user(), store.current_user());
}

#[test]
fn custom_keys_are_respected() {
    let storage = MemoryStorage::new();
    let config = SessionConfig { user_key: "u".to_owned(), token_key: "t".to_owned() };
    let mut store = SessionStore::with_config(storage.clone(), config);
    let ticket = store.begin_sign_in("super@clubhub.bd", "super123").expect("valid");
    let result = MockTransport::default().authenticate(&ticket.credentials);
    store.complete_sign_in(ticket.request, result).expect("ok");
    assert!(read(&storage, "u").is_some());
    assert!(read(&storage, "t").is_some());
    assert!(read(&storage, USER_KEY).is_none());
}

// =============================================================================
// dismiss / observation
// =============================================================================

#[test]
fn dismiss_error_returns_to_idle_only_from_error() {
    let (mut store, _) = store();
    assert!(!store.dismiss_error());
    let ticket = store.begin_sign_in("nobody@x.com", "wrong").expect("valid");
    let _ = store.complete_sign_in(ticket.request, Err(TransportError::InvalidCredentials));
    assert!(store.dismiss_error());
    assert_eq!(store.status(), Status::Idle);
}

#[tokio::test]
async fn listeners_see_each_committed_transition() {
    let (mut store, _) = store();
    let seen = Arc::new(AtomicU64::new(0));
    let seen_by_listener = Arc::clone(&seen);
    let id = store.subscribe(move |snapshot| {
        seen_by_listener.store(snapshot.revision, Ordering::SeqCst);
    });

    store.sign_in(&MockTransport::default(), "admin@du.ac.bd", "admin123").await.expect("ok");
    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(store.revision(), 2);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.sign_out();
    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(store.revision(), 3);
}

#[test]
fn no_op_dispatch_does_not_bump_revision() {
    let (mut store, _) = store();
    assert!(!store.dispatch(SessionAction::SignedOut));
    assert!(!store.dispatch(SessionAction::ErrorDismissed));
    assert_eq!(store.revision(), 0);
}

#[tokio::test]
async fn snapshot_mirrors_state() {
    let (store, _) = signed_in().await;
    let snapshot = store.snapshot();
    assert_eq!(snapshot.status, Status::Authenticated);
    assert_eq!(snapshot.user.as_ref(), store.current_user());
    assert_eq!(snapshot.error, None);
    assert_eq!(snapshot.revision, store.revision());
}
