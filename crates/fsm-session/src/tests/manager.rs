use crate::store::{CredentialStore, MemoryStore, Vault, keys};
use crate::tests::mock_api::{MockApi, ProfileBehavior};
use crate::tests::test_user;
use crate::{SessionManager, SessionState};

use std::sync::Arc;

use chrono::{Duration, Utc};
use fsm_config::SessionConfig;
use fsm_core::{Credentials, Role};

fn credentials() -> Credentials {
    Credentials::new("field.tech@acme.example", "hunter2")
}

fn build(api: MockApi) -> (SessionManager, Arc<MemoryStore>, Arc<MockApi>) {
    let store = Arc::new(MemoryStore::new());
    let api = Arc::new(api);
    let vault = Vault::new(store.clone() as Arc<dyn CredentialStore>);
    let manager = SessionManager::new(api.clone(), vault, &SessionConfig::default());
    (manager, store, api)
}

fn seed_tokens(store: &MemoryStore) {
    store.set(keys::ACCESS_TOKEN, "seeded-token").unwrap();
    store
        .set(
            keys::TOKEN_EXPIRY,
            &(Utc::now() + Duration::hours(1)).to_rfc3339(),
        )
        .unwrap();
}

// ============================================================================
// Restoration
// ============================================================================

#[tokio::test]
async fn given_matching_cached_profile_when_restored_then_no_network_call() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    let (manager, _store, api) = build(api);

    manager.login(&credentials(), false).await.unwrap();
    let state = manager.restore("/admin/dashboard").await;

    assert!(state.is_authenticated());
    assert_eq!(api.profile_call_count(), 0);
}

#[tokio::test]
async fn given_role_mismatch_when_restored_then_cache_rejected_and_profile_fetched() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    let (manager, store, api) = build(api);

    manager.login(&credentials(), false).await.unwrap();
    // Another layer changed the marker behind our back.
    store.set(keys::USER_ROLE, "ZONE_USER").unwrap();

    let state = manager.restore("/admin/dashboard").await;

    assert!(state.is_authenticated());
    assert_eq!(api.profile_call_count(), 1);
}

#[tokio::test]
async fn given_no_token_when_restored_then_anonymous() {
    let (manager, store, api) = build(MockApi::new(ProfileBehavior::NetworkFail));
    store.set(keys::CACHED_PROFILE, "{}").unwrap();

    let state = manager.restore("/admin/dashboard").await;

    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(api.profile_call_count(), 0);
    // Stale cache is purged along with the rest of the session.
    assert_eq!(store.get(keys::CACHED_PROFILE).unwrap(), None);
}

#[tokio::test]
async fn given_auth_path_when_restored_then_skipped_entirely() {
    let (manager, store, api) = build(MockApi::new(ProfileBehavior::NetworkFail));
    seed_tokens(&store);

    let state = manager.restore("/auth/login").await;

    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(api.profile_call_count(), 0);
    // Nothing was purged either; auth pages drive their own flow.
    assert!(store.get(keys::ACCESS_TOKEN).unwrap().is_some());
}

#[tokio::test]
async fn given_token_without_cache_when_restored_then_profile_fetched_and_cached() {
    let user = test_user(Role::ServicePerson);
    let (manager, store, api) = build(MockApi::new(ProfileBehavior::Succeed(user)));
    seed_tokens(&store);

    let state = manager.restore("/service-person/dashboard").await;

    assert!(state.is_authenticated());
    assert_eq!(api.profile_call_count(), 1);
    assert!(store.get(keys::CACHED_PROFILE).unwrap().is_some());
    assert_eq!(
        store.get(keys::USER_ROLE).unwrap().as_deref(),
        Some("SERVICE_PERSON")
    );
}

#[tokio::test]
async fn given_repeated_restores_within_window_then_single_network_call() {
    let user = test_user(Role::Admin);
    let (manager, store, api) = build(MockApi::new(ProfileBehavior::Succeed(user)));
    seed_tokens(&store);

    let first = manager.restore("/admin/dashboard").await;
    let second = manager.restore("/admin/dashboard").await;
    let third = manager.restore("/admin/tickets").await;

    assert!(first.is_authenticated());
    assert_eq!(second, first);
    assert_eq!(third, first);
    assert_eq!(api.profile_call_count(), 1);
}

#[tokio::test]
async fn given_expired_stored_token_when_restored_then_anonymous_without_network() {
    let (manager, store, api) = build(MockApi::new(ProfileBehavior::NetworkFail));
    store.set(keys::ACCESS_TOKEN, "stale-token").unwrap();
    store
        .set(
            keys::TOKEN_EXPIRY,
            &(Utc::now() - Duration::hours(1)).to_rfc3339(),
        )
        .unwrap();

    let state = manager.restore("/admin/dashboard").await;

    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(api.profile_call_count(), 0);
}

// ============================================================================
// Failure classification
// ============================================================================

#[tokio::test]
async fn given_fatal_rejection_when_restored_then_session_purged() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::Reject).with_login_user(user);
    let (manager, store, _api) = build(api);

    manager.login(&credentials(), false).await.unwrap();
    // Drop the cache so restoration must go to the network.
    store.remove(keys::CACHED_PROFILE).unwrap();

    let state = manager.restore("/admin/dashboard").await;

    assert!(matches!(state, SessionState::Failed { .. }));
    assert_eq!(store.get(keys::ACCESS_TOKEN).unwrap(), None);
    assert_eq!(store.get(keys::USER_ROLE).unwrap(), None);
}

#[tokio::test]
async fn given_forbidden_when_restored_then_session_purged() {
    let (manager, store, _api) = build(MockApi::new(ProfileBehavior::Forbid));
    seed_tokens(&store);

    let state = manager.restore("/admin/dashboard").await;

    assert!(matches!(state, SessionState::Failed { .. }));
    assert_eq!(store.get(keys::ACCESS_TOKEN).unwrap(), None);
}

#[tokio::test]
async fn given_network_failure_when_restored_then_stale_session_kept() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::NetworkFail).with_login_user(user.clone());
    let (manager, store, _api) = build(api);

    manager.login(&credentials(), false).await.unwrap();
    store.remove(keys::CACHED_PROFILE).unwrap();

    let state = manager.restore("/admin/dashboard").await;

    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.email.clone()), Some(user.email));
    // Token survives a soft failure.
    assert!(store.get(keys::ACCESS_TOKEN).unwrap().is_some());
}

#[tokio::test]
async fn given_network_failure_without_live_session_then_cached_profile_used() {
    let (manager, store, _api) = build(MockApi::new(ProfileBehavior::NetworkFail));
    seed_tokens(&store);
    let cached = test_user(Role::ZoneUser);
    store
        .set(
            keys::CACHED_PROFILE,
            &serde_json::to_string(&cached).unwrap(),
        )
        .unwrap();
    // No role marker: the cache is not adoptable optimistically, but it
    // is still the best fallback after a soft failure.

    let state = manager.restore("/zone/dashboard").await;

    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.role), Some(Role::ZoneUser));
}

#[tokio::test(start_paused = true)]
async fn given_hanging_profile_fetch_when_restored_then_safety_timeout_degrades() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::Hang).with_login_user(user);
    let (manager, store, _api) = build(api);

    manager.login(&credentials(), false).await.unwrap();
    store.remove(keys::CACHED_PROFILE).unwrap();

    let state = manager.restore("/admin/dashboard").await;

    // The fetch never returned, but the UI is not left hanging and the
    // stale session survives.
    assert!(state.is_authenticated());
}

#[tokio::test]
async fn given_connectivity_recovered_when_restored_again_then_profile_refetched() {
    let user = test_user(Role::Admin);
    let store = Arc::new(MemoryStore::new());
    let api = Arc::new(MockApi::new(ProfileBehavior::NetworkFail));
    let vault = Vault::new(store.clone() as Arc<dyn CredentialStore>);
    // No throttle window so the second attempt goes through immediately.
    let config = SessionConfig {
        restore_min_interval_ms: 0,
        ..SessionConfig::default()
    };
    let manager = SessionManager::new(api.clone(), vault, &config);

    seed_tokens(&store);
    let first = manager.restore("/admin/dashboard").await;
    assert_eq!(first, SessionState::Anonymous);

    // The backend is reachable again; the failed attempt purged the
    // stored session, so seed a fresh token.
    api.set_profile_behavior(ProfileBehavior::Succeed(user));
    seed_tokens(&store);
    let second = manager.restore("/admin/dashboard").await;

    assert!(second.is_authenticated());
    assert_eq!(api.profile_call_count(), 2);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn given_remember_me_when_logged_in_then_thirty_day_expiry() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    let (manager, _store, _api) = build(api);

    let (session, _route) = manager.login(&credentials(), true).await.unwrap();

    let ttl = session.tokens.expires_at - Utc::now();
    assert!(ttl > Duration::days(29));
    assert!(ttl <= Duration::days(30));
}

#[tokio::test]
async fn given_plain_login_then_one_day_expiry() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    let (manager, _store, _api) = build(api);

    let (session, _route) = manager.login(&credentials(), false).await.unwrap();

    let ttl = session.tokens.expires_at - Utc::now();
    assert!(ttl > Duration::hours(23));
    assert!(ttl <= Duration::hours(24));
}

#[tokio::test]
async fn given_login_then_route_is_role_keyed() {
    let user = test_user(Role::ZoneUser);
    let api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    let (manager, _store, _api) = build(api);

    let (_session, route) = manager.login(&credentials(), false).await.unwrap();

    assert_eq!(route, "/zone/dashboard");
}

#[tokio::test]
async fn given_placeholder_name_when_logged_in_then_name_normalized() {
    let mut user = test_user(Role::Admin);
    user.name = Some("User".to_string());
    let api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    let (manager, store, _api) = build(api);

    let (session, _route) = manager.login(&credentials(), false).await.unwrap();

    assert_eq!(session.user.name.as_deref(), Some("field.tech"));
    // The persisted cache carries the resolved name too.
    let cached = store.get(keys::CACHED_PROFILE).unwrap().unwrap();
    assert!(cached.contains("field.tech"));
}

#[tokio::test]
async fn given_malformed_credentials_when_logged_in_then_rejected_before_network() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    let (manager, store, _api) = build(api);

    let result = manager.login(&Credentials::new("not-an-email", "x"), false).await;

    assert!(result.is_err());
    assert_eq!(store.get(keys::ACCESS_TOKEN).unwrap(), None);
}

#[tokio::test]
async fn given_remember_me_login_then_email_remembered() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    let (manager, store, _api) = build(api);

    manager.login(&credentials(), true).await.unwrap();

    assert_eq!(
        store.get(keys::REMEMBERED_LOGIN).unwrap().as_deref(),
        Some("field.tech@acme.example")
    );
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn given_logout_then_session_artifacts_removed_and_convenience_kept() {
    let user = test_user(Role::Admin);
    let api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    let (manager, store, api) = build(api);

    manager.login(&credentials(), true).await.unwrap();
    store.set(keys::PIN_SESSION, "pin-data").unwrap();
    store.set(keys::PIN_ACCESS_SESSION, "pin-access").unwrap();
    store.set(keys::PIN_LOCKOUT_INFO, "lockout").unwrap();

    manager.logout().await.unwrap();

    assert_eq!(manager.state().await, SessionState::Anonymous);
    assert_eq!(api.invalidate_calls.load(std::sync::atomic::Ordering::SeqCst), 1);

    for key in keys::SESSION_ARTIFACTS {
        assert_eq!(store.get(key).unwrap(), None, "{key} should be purged");
    }

    assert_eq!(store.get(keys::PIN_SESSION).unwrap().as_deref(), Some("pin-data"));
    assert_eq!(
        store.get(keys::PIN_ACCESS_SESSION).unwrap().as_deref(),
        Some("pin-access")
    );
    assert_eq!(
        store.get(keys::PIN_LOCKOUT_INFO).unwrap().as_deref(),
        Some("lockout")
    );
    assert_eq!(
        store.get(keys::REMEMBERED_LOGIN).unwrap().as_deref(),
        Some("field.tech@acme.example")
    );
}

#[tokio::test]
async fn given_server_invalidation_failure_when_logged_out_then_local_purge_still_runs() {
    let user = test_user(Role::Admin);
    let mut api = MockApi::new(ProfileBehavior::Succeed(user.clone())).with_login_user(user);
    api.invalidate_fails = true;
    let (manager, store, _api) = build(api);

    manager.login(&credentials(), false).await.unwrap();
    manager.logout().await.unwrap();

    assert_eq!(manager.state().await, SessionState::Anonymous);
    assert_eq!(store.get(keys::ACCESS_TOKEN).unwrap(), None);
}
