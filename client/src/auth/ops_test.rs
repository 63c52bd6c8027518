use std::cell::RefCell;
use std::time::Duration;

use super::*;
use crate::auth::bearer::BearerSession;
use crate::auth::cookie::CookieSession;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::types::User;
use crate::testing::{FakeTransport, MemoryTokenStorage, NavLog, block_on};

const USER_BODY: &str = r#"{"id":"9b2e","email":"ada@example.com"}"#;

fn cookie(transport: FakeTransport) -> CookieSession<FakeTransport> {
    CookieSession::new(ApiClient::new(transport, ApiConfig::new("https://api.test")))
}

fn bearer(transport: FakeTransport, storage: MemoryTokenStorage) -> BearerSession<FakeTransport, MemoryTokenStorage> {
    BearerSession::new(ApiClient::new(transport, ApiConfig::new("https://api.test")), storage)
}

fn ada() -> User {
    User { id: "9b2e".to_owned(), email: "ada@example.com".to_owned() }
}

fn token(raw: &str) -> BearerToken {
    BearerToken::new(raw).unwrap()
}

fn signed_out<I>() -> RefCell<AuthState<I>> {
    let mut state = AuthState::new();
    state.resolve(None);
    RefCell::new(state)
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_bearer_restores_stored_token_without_network() {
    let mechanism = bearer(FakeTransport::new(), MemoryTokenStorage::with_token("abc"));
    let store = RefCell::new(AuthState::new());

    block_on(initialize(&mechanism, &store));

    let state = store.snapshot();
    assert!(!state.is_loading());
    assert_eq!(state.identity(), Some(&token("abc")));
    assert!(mechanism.api().transport().requests().is_empty());
}

#[test]
fn initialize_cookie_401_is_unauthenticated() {
    let mechanism = cookie(FakeTransport::new().respond(401, ""));
    let store = RefCell::new(AuthState::new());

    block_on(initialize(&mechanism, &store));

    let state = store.snapshot();
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.identity().is_none());
}

#[test]
fn initialize_cookie_success_holds_user() {
    let mechanism = cookie(FakeTransport::new().respond(200, USER_BODY));
    let store = RefCell::new(AuthState::new());
    block_on(initialize(&mechanism, &store));
    assert_eq!(store.snapshot().identity(), Some(&ada()));
}

#[test]
fn initialize_after_login_keeps_login() {
    let mechanism = cookie(FakeTransport::new().respond(401, ""));
    let store = RefCell::new(AuthState::new());
    set_authenticated(&mechanism, &store, ada());

    block_on(initialize(&mechanism, &store));

    assert_eq!(store.snapshot().identity(), Some(&ada()));
}

// =============================================================
// login_with_password
// =============================================================

#[test]
fn password_login_rejected_leaves_store_unchanged() {
    for status in [400, 401] {
        let mechanism = cookie(FakeTransport::new().respond(status, ""));
        let store = signed_out::<User>();
        let before = store.snapshot();
        let nav = NavLog::default();

        let result = block_on(login_with_password(&mechanism, &store, &Credentials::new("u", "wrong"), &nav.navigate()));

        assert_eq!(result, Err(AuthError::Authentication));
        assert_eq!(store.snapshot(), before);
        assert!(nav.paths().is_empty());
    }
}

#[test]
fn password_login_cookie_success_authenticates_and_navigates() {
    let mechanism = cookie(FakeTransport::new().respond(204, "").respond(200, USER_BODY));
    let store = signed_out::<User>();
    let nav = NavLog::default();

    block_on(login_with_password(&mechanism, &store, &Credentials::new("u", "right"), &nav.navigate())).unwrap();

    assert_eq!(store.snapshot().identity(), Some(&ada()));
    assert_eq!(nav.paths(), vec!["/profile".to_owned()]);
}

#[test]
fn password_login_cookie_profile_failure_leaves_store_unchanged() {
    let mechanism = cookie(FakeTransport::new().respond(204, "").respond(401, ""));
    let store = signed_out::<User>();
    let nav = NavLog::default();

    let result = block_on(login_with_password(&mechanism, &store, &Credentials::new("u", "right"), &nav.navigate()));

    assert_eq!(result, Err(AuthError::ProfileFetch));
    assert!(!store.snapshot().is_authenticated());
    assert!(nav.paths().is_empty());
}

#[test]
fn password_login_bearer_persists_token() {
    let mechanism = bearer(
        FakeTransport::new().respond(200, r#"{"access_token":"jwt-1"}"#),
        MemoryTokenStorage::default(),
    );
    let store = signed_out::<BearerToken>();
    let nav = NavLog::default();

    block_on(login_with_password(&mechanism, &store, &Credentials::new("u", "p"), &nav.navigate())).unwrap();

    assert_eq!(store.snapshot().identity(), Some(&token("jwt-1")));
    assert_eq!(mechanism.storage().stored().as_deref(), Some("jwt-1"));
    assert_eq!(nav.paths(), vec!["/profile".to_owned()]);
}

#[test]
fn concurrent_logins_last_resolution_wins() {
    let mechanism = bearer(
        FakeTransport::new()
            .respond(200, r#"{"access_token":"first"}"#)
            .respond(200, r#"{"access_token":"second"}"#),
        MemoryTokenStorage::default(),
    );
    let store = signed_out::<BearerToken>();
    let nav = NavLog::default();
    let creds = Credentials::new("u", "p");

    let nav_a = nav.navigate();
    let nav_b = nav.navigate();

    block_on(async {
        let a = login_with_password(&mechanism, &store, &creds, &nav_a);
        let b = login_with_password(&mechanism, &store, &creds, &nav_b);
        let (ra, rb) = futures::join!(a, b);
        ra.unwrap();
        rb.unwrap();
    });

    assert_eq!(store.snapshot().identity(), Some(&token("second")));
    assert_eq!(mechanism.storage().stored().as_deref(), Some("second"));
}

// =============================================================
// login_with_oauth_token
// =============================================================

#[test]
fn oauth_token_matches_set_authenticated() {
    let mechanism = bearer(FakeTransport::new(), MemoryTokenStorage::default());
    let via_callback = signed_out::<BearerToken>();
    let nav = NavLog::default();
    block_on(login_with_oauth_token(&mechanism, &via_callback, Some("xyz"), &nav.navigate())).unwrap();

    let reference_mechanism = bearer(FakeTransport::new(), MemoryTokenStorage::default());
    let direct = signed_out::<BearerToken>();
    set_authenticated(&reference_mechanism, &direct, token("xyz"));

    assert_eq!(via_callback.snapshot(), direct.snapshot());
    assert_eq!(mechanism.storage().stored(), reference_mechanism.storage().stored());
    assert_eq!(nav.paths(), vec!["/profile".to_owned()]);
}

#[test]
fn oauth_missing_token_changes_nothing_and_schedules_login() {
    for missing in [None, Some(""), Some("   ")] {
        let mechanism = bearer(FakeTransport::new(), MemoryTokenStorage::default());
        let store = signed_out::<BearerToken>();
        let before = store.snapshot();
        let nav = NavLog::default();

        let err = block_on(login_with_oauth_token(&mechanism, &store, missing, &nav.navigate())).unwrap_err();

        assert_eq!(err, AuthError::MissingToken);
        assert_eq!(store.snapshot(), before);
        assert!(nav.paths().is_empty());
        let redirect = err.fallback_redirect().unwrap();
        assert_eq!(redirect.target, AppRoute::Login);
        assert_eq!(redirect.delay, Duration::from_secs(3));
    }
}

#[test]
fn oauth_token_cookie_mode_fetches_profile() {
    let mechanism = cookie(FakeTransport::new().respond(200, USER_BODY));
    let store = signed_out::<User>();
    let nav = NavLog::default();

    block_on(login_with_oauth_token(&mechanism, &store, Some("xyz"), &nav.navigate())).unwrap();

    assert_eq!(store.snapshot().identity(), Some(&ada()));
}

// =============================================================
// logout
// =============================================================

#[test]
fn cookie_logout_clears_even_when_server_call_fails() {
    let mechanism = cookie(FakeTransport::new().respond(500, ""));
    let store = signed_out::<User>();
    set_authenticated(&mechanism, &store, ada());
    let nav = NavLog::default();

    block_on(logout(&mechanism, &store, &nav.navigate()));

    assert!(!store.snapshot().is_authenticated());
    assert_eq!(mechanism.api().transport().requests().len(), 1);
    assert_eq!(nav.paths(), vec!["/login".to_owned()]);
}

#[test]
fn bearer_logout_is_local_only() {
    let mechanism = bearer(FakeTransport::new(), MemoryTokenStorage::default());
    let store = signed_out::<BearerToken>();
    set_authenticated(&mechanism, &store, token("abc"));
    let nav = NavLog::default();

    block_on(logout(&mechanism, &store, &nav.navigate()));

    assert!(store.snapshot().identity().is_none());
    assert_eq!(mechanism.storage().stored(), None);
    assert!(mechanism.api().transport().requests().is_empty());
    assert_eq!(nav.paths(), vec!["/login".to_owned()]);
}

// =============================================================
// register_user / begin_oauth_login
// =============================================================

#[test]
fn register_success_schedules_login_after_one_second() {
    let mechanism = cookie(FakeTransport::new().respond(201, USER_BODY));
    let redirect = block_on(register_user(&mechanism, &Credentials::new("ada", "pw"))).unwrap();
    assert_eq!(redirect, ScheduledRedirect { delay: Duration::from_secs(1), target: AppRoute::Login });
}

#[test]
fn register_rejected_is_registration_error() {
    let mechanism = cookie(FakeTransport::new().respond(400, ""));
    assert_eq!(
        block_on(register_user(&mechanism, &Credentials::new("ada", "pw"))),
        Err(AuthError::Registration)
    );
}

#[test]
fn begin_oauth_login_redirects_to_provider() {
    let mechanism = cookie(FakeTransport::new().respond(200, r#"{"authorization_url":"https://accounts.example/o"}"#));
    let target = RefCell::new(None);

    block_on(begin_oauth_login(&mechanism, |url: &str| *target.borrow_mut() = Some(url.to_owned()))).unwrap();

    assert_eq!(target.into_inner().as_deref(), Some("https://accounts.example/o"));
}

#[test]
fn begin_oauth_login_failure_does_not_redirect() {
    let mechanism = cookie(FakeTransport::new().respond(200, r#"{"authorization_url":7}"#));
    let redirected = RefCell::new(false);

    let result = block_on(begin_oauth_login(&mechanism, |_: &str| *redirected.borrow_mut() = true));

    assert_eq!(result, Err(AuthError::OAuthInit));
    assert!(!redirected.into_inner());
}
