use super::*;
use crate::config::ApiConfig;
use crate::testing::{FakeTransport, MemoryTokenStorage, block_on};

fn session(transport: FakeTransport, storage: MemoryTokenStorage) -> BearerSession<FakeTransport, MemoryTokenStorage> {
    BearerSession::new(ApiClient::new(transport, ApiConfig::new("https://api.test")), storage)
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_reads_storage_without_network() {
    let s = session(FakeTransport::new(), MemoryTokenStorage::with_token("abc"));
    assert_eq!(block_on(s.restore()), BearerToken::new("abc"));
    assert!(s.api().transport().requests().is_empty());
}

#[test]
fn restore_keeps_stored_token_verbatim() {
    let s = session(FakeTransport::new(), MemoryTokenStorage::with_token(" abc "));
    let restored = block_on(s.restore()).unwrap();
    assert_eq!(Some(restored.as_str().to_owned()), s.storage().stored());
}

#[test]
fn restore_empty_storage_is_signed_out() {
    let s = session(FakeTransport::new(), MemoryTokenStorage::default());
    assert_eq!(block_on(s.restore()), None);

    let s = session(FakeTransport::new(), MemoryTokenStorage::with_token(""));
    assert_eq!(block_on(s.restore()), None);
}

// =============================================================
// sign_in
// =============================================================

#[test]
fn sign_in_reads_access_token() {
    let s = session(
        FakeTransport::new().respond(200, r#"{"access_token":"jwt-1","token_type":"bearer"}"#),
        MemoryTokenStorage::default(),
    );
    assert_eq!(block_on(s.sign_in(&Credentials::new("u", "p"))), Ok(BearerToken::new("jwt-1").unwrap()));
}

#[test]
fn sign_in_malformed_body_is_reported() {
    let s = session(FakeTransport::new().respond(200, r#"{"token":"jwt-1"}"#), MemoryTokenStorage::default());
    assert!(matches!(
        block_on(s.sign_in(&Credentials::new("u", "p"))),
        Err(AuthError::MalformedResponse(_))
    ));
}

#[test]
fn sign_in_rejected_is_authentication_error() {
    let s = session(FakeTransport::new().respond(400, ""), MemoryTokenStorage::default());
    assert_eq!(block_on(s.sign_in(&Credentials::new("u", "wrong"))), Err(AuthError::Authentication));
}

// =============================================================
// persistence
// =============================================================

#[test]
fn remember_and_forget_mirror_storage() {
    let s = session(FakeTransport::new(), MemoryTokenStorage::default());
    s.remember(&BearerToken::new("abc").unwrap());
    assert_eq!(s.storage().stored().as_deref(), Some("abc"));
    s.forget();
    assert_eq!(s.storage().stored(), None);
}

#[test]
fn end_server_session_makes_no_request() {
    let s = session(FakeTransport::new(), MemoryTokenStorage::with_token("abc"));
    block_on(s.end_server_session());
    assert!(s.api().transport().requests().is_empty());
}

// =============================================================
// profile
// =============================================================

#[test]
fn load_profile_sends_bearer_header() {
    let s = session(
        FakeTransport::new().respond(200, r#"{"id":"1","email":"a@b.com"}"#),
        MemoryTokenStorage::default(),
    );
    let user = block_on(s.load_profile(&BearerToken::new("jwt-1").unwrap())).unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(s.api().transport().requests()[0].bearer.as_deref(), Some("jwt-1"));
}

#[test]
fn bearer_sessions_redirect_public_pages() {
    assert_eq!(
        BearerSession::<FakeTransport, MemoryTokenStorage>::PUBLIC_ACCESS,
        PublicAccess::RedirectToProfile
    );
}
