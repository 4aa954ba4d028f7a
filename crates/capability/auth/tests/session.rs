use buoysense_auth::{InMemorySessionStore, SessionRecord, SessionService, SessionStore};
use chrono::Utc;
use domain::Role;
use std::sync::Arc;

fn service() -> (Arc<InMemorySessionStore>, SessionService) {
    let store = Arc::new(InMemorySessionStore::new());
    (store.clone(), SessionService::new(store, 86_400))
}

#[test]
fn login_then_current_user_round_trips() {
    let (_, service) = service();
    let (user, tokens) = service.login("admin@buoysense.com", "secret").expect("login");
    assert!(tokens.token.starts_with("demo-token-"));
    assert_eq!(user.email, "admin@buoysense.com");
    assert_eq!(user.name, "Admin User");

    let current = service.current_user(&tokens.token).expect("session");
    assert_eq!(current.role, Role::Admin);
    assert_eq!(current.id, tokens.token);
}

// logout 后 current_user 必为"无用户"，与此前状态无关。
#[test]
fn logout_always_yields_no_user() {
    let (_, service) = service();

    // 从未登录
    service.logout("demo-token-unknown");
    assert!(service.current_user("demo-token-unknown").is_none());

    // 正常会话
    let (_, tokens) = service.login("operator@buoysense.com", "x").expect("login");
    service.logout(&tokens.token);
    assert!(service.current_user(&tokens.token).is_none());

    // 重复登出仍是 no-op
    service.logout(&tokens.token);
    assert!(service.current_user(&tokens.token).is_none());
}

#[test]
fn missing_or_garbled_role_degrades_to_operator() {
    let (store, service) = service();
    store.save(SessionRecord {
        token: "demo-token-garbled".to_string(),
        role_code: "superuser".to_string(),
        issued_at_ms: Utc::now().timestamp_millis(),
    });
    store.save(SessionRecord {
        token: "demo-token-blank".to_string(),
        role_code: String::new(),
        issued_at_ms: Utc::now().timestamp_millis(),
    });

    let garbled = service.current_user("demo-token-garbled").expect("session");
    assert_eq!(garbled.role, Role::Operator);
    let blank = service.current_user("demo-token-blank").expect("session");
    assert_eq!(blank.role, Role::Operator);
}

#[test]
fn tokens_are_unique_per_login() {
    let (_, service) = service();
    let (_, first) = service.login("a@buoysense.com", "x").expect("login");
    let (_, second) = service.login("a@buoysense.com", "x").expect("login");
    assert_ne!(first.token, second.token);
    // 两个会话互不影响
    service.logout(&first.token);
    assert!(service.current_user(&second.token).is_some());
}
