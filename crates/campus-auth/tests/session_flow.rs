//! Session store behavior under simulated latency.
//!
//! Tests run with a paused tokio clock so the configured latency and timeout
//! resolve instantly and deterministically.

use std::time::Duration;

use campus_auth::{AuthError, SessionStore};
use campus_config::AuthConfig;
use campus_core::enums::Role;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn strict_config() -> AuthConfig {
    AuthConfig {
        enforce_credentials: true,
        ..AuthConfig::default()
    }
}

#[rstest]
#[case(None, Role::Alumni)]
#[case(Some(Role::Student), Role::Student)]
#[case(Some(Role::Admin), Role::Admin)]
#[tokio::test(start_paused = true)]
async fn sign_in_uses_hint_or_default_role(#[case] hint: Option<Role>, #[case] expected: Role) {
    let store = SessionStore::default();
    let user = store
        .sign_in("lisa.wang@email.com", "secret", hint)
        .await
        .expect("mock sign-in always succeeds");

    assert_eq!(user.role, expected);
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email, "lisa.wang@email.com");
    assert!(user.is_authenticated);
    assert!(user.id.starts_with("usr-"));
    assert_eq!(store.current_user(), Some(user));
}

#[rstest]
#[case(None)]
#[case(Some(Role::Student))]
#[case(Some(Role::Alumni))]
#[tokio::test(start_paused = true)]
async fn admin_email_is_always_admin(#[case] hint: Option<Role>) {
    let store = SessionStore::default();
    let user = store
        .sign_in("admin@university.edu", "anything", hint)
        .await
        .expect("sign in");

    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name, "Admin User");
}

#[tokio::test(start_paused = true)]
async fn sign_in_waits_for_configured_latency() {
    let store = SessionStore::default();
    let start = tokio::time::Instant::now();
    store.sign_in("a@b.edu", "pw", None).await.expect("sign in");
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn sign_up_uses_supplied_name_and_role() {
    let store = SessionStore::default();
    let user = store
        .sign_up("Priya Patel", "priya@university.edu", "pw", Role::Student)
        .await
        .expect("sign up");

    assert_eq!(user.name, "Priya Patel");
    assert_eq!(user.role, Role::Student);
    assert_eq!(store.current_user().map(|u| u.email), Some("priya@university.edu".into()));
}

#[tokio::test(start_paused = true)]
async fn sign_up_never_grants_admin() {
    let store = SessionStore::default();
    let err = store
        .sign_up("Mallory", "m@university.edu", "pw", Role::Admin)
        .await
        .expect_err("admin sign-up must fail");
    assert!(matches!(err, AuthError::AdminSignUp));
    assert!(store.current_user().is_none());
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_pending_is_rejected() {
    let store = SessionStore::default();

    let (first, second) = tokio::join!(
        store.sign_in("first@university.edu", "pw", None),
        async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            assert!(store.is_pending());
            store.sign_in("second@university.edu", "pw", None).await
        }
    );

    let first = first.expect("first submission completes");
    assert!(matches!(second, Err(AuthError::SubmitPending)));
    assert_eq!(store.current_user(), Some(first));
    assert!(!store.is_pending());
}

#[tokio::test(start_paused = true)]
async fn dropped_submission_releases_pending_flag() {
    let store = SessionStore::default();
    let result = tokio::time::timeout(
        Duration::from_millis(100),
        store.sign_in("slow@university.edu", "pw", None),
    )
    .await;
    assert!(result.is_err(), "outer timeout should cancel the call");
    assert!(!store.is_pending());
    assert!(store.current_user().is_none());

    store
        .sign_in("retry@university.edu", "pw", None)
        .await
        .expect("retry succeeds after cancellation");
}

#[tokio::test(start_paused = true)]
async fn latency_beyond_timeout_is_a_timeout() {
    let store = SessionStore::new(AuthConfig {
        latency_ms: 5_000,
        timeout_ms: 200,
        ..AuthConfig::default()
    });

    let err = store
        .sign_in("a@b.edu", "pw", None)
        .await
        .expect_err("should time out");
    assert!(matches!(err, AuthError::Timeout { after_ms: 200 }));
    assert!(store.current_user().is_none());
}

#[tokio::test(start_paused = true)]
async fn lenient_mode_accepts_blank_credentials() {
    let store = SessionStore::default();
    store.sign_in("", "", None).await.expect("mock accepts anything");
    assert!(store.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn strict_mode_rejects_blank_credentials() {
    let store = SessionStore::new(strict_config());
    let err = store
        .sign_in("a@b.edu", "", None)
        .await
        .expect_err("blank password");
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.user_message(), "Invalid email or password.");
}

#[tokio::test(start_paused = true)]
async fn strict_mode_rejects_duplicate_sign_up() {
    let store = SessionStore::new(strict_config());
    store
        .sign_up("Ana", "ana@university.edu", "pw", Role::Alumni)
        .await
        .expect("first sign-up");
    store.sign_out();

    let err = store
        .sign_up("Ana Again", " ANA@university.edu ", "pw", Role::Student)
        .await
        .expect_err("duplicate sign-up");
    assert!(matches!(err, AuthError::DuplicateAccount { .. }));
    assert!(store.current_user().is_none());
}

#[tokio::test(start_paused = true)]
async fn sign_out_then_sign_in_replaces_user() {
    let store = SessionStore::default();
    let admin = store
        .sign_in("admin@university.edu", "admin123", None)
        .await
        .expect("admin");
    store.sign_out();
    let member = store
        .sign_in("james.wilson@email.com", "pw", Some(Role::Alumni))
        .await
        .expect("member");

    assert_ne!(admin.id, member.id);
    assert_eq!(store.current_user().map(|u| u.role), Some(Role::Alumni));
}
