mod common;

use common::*;

use nowest::auth::{self, AuthService, AuthState, SessionStore};
use nowest::models::SessionRecord;

// Credential store

#[test]
fn verify_accepts_only_the_fixed_pair() {
    assert!(auth::verify(ADMIN_USERNAME, ADMIN_PASSWORD).is_some());

    for (username, password) in [
        ("admin", "wrong"),
        ("wrong", "admin123"),
        ("Admin", "admin123"),
        ("admin", "Admin123"),
        ("", ""),
        ("admin ", "admin123"),
        ("admin", "admin123 "),
    ] {
        assert!(
            auth::verify(username, password).is_none(),
            "({username:?}, {password:?}) must not verify"
        );
    }
}

#[test]
fn verify_returns_the_fixed_record() {
    let record = auth::verify(ADMIN_USERNAME, ADMIN_PASSWORD).unwrap();
    assert_eq!(record, fixed_record());
}

// Session persistence

#[test]
fn save_then_load_round_trips() {
    let (store, _dir) = temp_store();
    let record = fixed_record();

    store.save(&record).expect("save");
    assert_eq!(store.load(), Some(record));
}

#[test]
fn load_from_fresh_store_is_absent() {
    let (store, _dir) = temp_store();
    assert_eq!(store.load(), None);
}

#[test]
fn clear_is_idempotent() {
    let (store, _dir) = temp_store();
    store.save(&fixed_record()).expect("save");

    store.clear().expect("first clear");
    store.clear().expect("second clear must also succeed");
    assert_eq!(store.load(), None);
}

#[test]
fn corrupt_record_is_purged_on_load() {
    let (store, dir) = temp_store();
    write_raw_session(dir.path(), b"{not json at all");

    assert_eq!(store.load(), None);
    assert!(
        !session_file_exists(dir.path()),
        "corrupt session file must be purged"
    );
}

#[test]
fn partial_record_is_treated_as_corrupt() {
    let (store, dir) = temp_store();
    write_raw_session(dir.path(), br#"{"id": "1", "username": "admin"}"#);

    assert_eq!(store.load(), None);
    assert!(!session_file_exists(dir.path()));
}

#[test]
fn save_overwrites_in_place() {
    let (store, _dir) = temp_store();
    store.save(&fixed_record()).expect("save");

    let replacement = SessionRecord {
        id: "1".to_string(),
        username: "admin".to_string(),
        email: "ops@nowestinterior.com".to_string(),
    };
    store.save(&replacement).expect("overwrite");
    assert_eq!(store.load(), Some(replacement));
}

// Auth state machine

#[actix_web::test]
async fn starts_loading_then_settles_unauthenticated() {
    let (store, _dir) = temp_store();
    let auth = AuthService::new(store);

    assert!(auth.is_loading());
    assert!(!auth.is_authenticated());

    auth.hydrate().await;
    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);
    assert!(!auth.is_loading());
}

#[actix_web::test]
async fn hydrate_restores_a_persisted_session() {
    let (store, _dir) = temp_store();
    store.save(&fixed_record()).expect("seed session");

    let auth = AuthService::new(store);
    auth.hydrate().await;

    assert!(auth.is_authenticated());
    assert_eq!(auth.current_user(), Some(fixed_record()));
}

#[actix_web::test]
async fn login_with_bad_credentials_returns_false_and_stays_put() {
    let (store, _dir) = temp_store();
    let auth = AuthService::new(store);
    auth.hydrate().await;

    assert!(!auth.login("admin", "nope"));
    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);
    assert!(!auth.login("", ""));
    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);
}

#[actix_web::test]
async fn login_success_transitions_and_persists() {
    let (store, _dir) = temp_store();
    let probe = store.clone();
    let auth = AuthService::new(store);
    auth.hydrate().await;

    assert!(auth.login(ADMIN_USERNAME, ADMIN_PASSWORD));
    // Visible before the call returns: no await between transition and here.
    assert!(auth.is_authenticated());
    assert_eq!(auth.current_user(), Some(fixed_record()));

    // Written through to durable storage.
    assert_eq!(probe.load(), Some(fixed_record()));
}

#[actix_web::test]
async fn logout_clears_state_and_storage_idempotently() {
    let (store, _dir) = temp_store();
    let probe = store.clone();
    let auth = AuthService::new(store);
    auth.hydrate().await;
    assert!(auth.login(ADMIN_USERNAME, ADMIN_PASSWORD));

    auth.logout();
    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);
    assert_eq!(probe.load(), None);

    // Second logout is a no-op with the same end state.
    auth.logout();
    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);
    assert_eq!(probe.load(), None);
}

#[actix_web::test]
async fn hydrate_purges_corruption_and_lands_unauthenticated() {
    let (store, dir) = temp_store();
    write_raw_session(dir.path(), b"\xff\xfe not even utf-8");

    let auth = AuthService::new(store);
    auth.hydrate().await;

    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);
    assert!(!session_file_exists(dir.path()));
}

#[actix_web::test]
async fn hydrate_after_login_does_not_clobber_the_fresh_session() {
    let (store, dir) = temp_store();
    let auth = AuthService::new(store);

    // Login before hydration settles the state on its own.
    assert!(auth.login(ADMIN_USERNAME, ADMIN_PASSWORD));
    assert!(auth.is_authenticated());

    // Storage changes out from under us; a late hydrate must not read it.
    write_raw_session(
        dir.path(),
        br#"{"id": "9", "username": "stale", "email": "stale@nowestinterior.com"}"#,
    );
    auth.hydrate().await;
    assert_eq!(auth.current_user(), Some(fixed_record()));
}

#[actix_web::test]
async fn hydrate_after_logout_stays_unauthenticated() {
    let (store, dir) = temp_store();
    store.save(&fixed_record()).expect("seed session");

    let auth = AuthService::new(store);
    auth.logout();
    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);

    // Same race from the other side: a record written after the logout must
    // not resurrect the session through a late hydrate.
    write_raw_session(
        dir.path(),
        br#"{"id": "1", "username": "admin", "email": "admin@nowestinterior.com"}"#,
    );
    auth.hydrate().await;
    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);
}

#[actix_web::test]
async fn session_survives_a_simulated_restart() {
    let (store, dir) = temp_store();

    // First "process": fresh storage, log in.
    let auth = AuthService::new(store);
    auth.hydrate().await;
    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);
    assert!(auth.login(ADMIN_USERNAME, ADMIN_PASSWORD));
    drop(auth);

    // Second "process" over the same directory: session is restored.
    let store = SessionStore::open(dir.path()).expect("reopen store");
    let auth = AuthService::new(store);
    assert!(auth.is_loading());
    auth.hydrate().await;
    assert_eq!(auth.snapshot(), AuthState::Authenticated(fixed_record()));

    // And logging out ends it for the next restart too.
    auth.logout();
    drop(auth);

    let store = SessionStore::open(dir.path()).expect("reopen store again");
    let auth = AuthService::new(store);
    auth.hydrate().await;
    assert_eq!(auth.snapshot(), AuthState::Unauthenticated);
}
