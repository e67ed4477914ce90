//! AuthService integration tests over a real store.
//!
//! Drives the full credential and session lifecycle through the public
//! crate API.

use authgate::{AuthError, AuthService, Database, UserKey, UserRepository};

async fn service_with_db() -> (AuthService, Database) {
    let db = Database::connect_in_memory().await.unwrap();
    let service = AuthService::new(db.pool().clone());
    (service, db)
}

#[tokio::test]
async fn test_full_account_lifecycle() {
    let (service, db) = service_with_db().await;

    // Register and login
    let user = service.register("eve@example.com", "first password").await.unwrap();
    assert!(service.login("eve@example.com", "first password").await.unwrap());

    // Session issue, resolve, re-issue, destroy
    let session = service.create_session("eve@example.com").await.unwrap();
    let resolved = service.resolve_session(&session).await.unwrap().unwrap();
    assert_eq!(resolved.id, user.id);

    let newer = service.create_session("eve@example.com").await.unwrap();
    assert!(service.resolve_session(&session).await.unwrap().is_none());

    service.destroy_session(user.id).await.unwrap();
    assert!(service.resolve_session(&newer).await.unwrap().is_none());

    // Reset flow
    let reset = service.issue_reset_token("eve@example.com").await.unwrap();
    service.consume_reset_token(&reset, "second password").await.unwrap();
    assert!(service.login("eve@example.com", "second password").await.unwrap());
    assert!(!service.login("eve@example.com", "first password").await.unwrap());

    // Record state after the lifecycle: no tokens pending
    let repo = UserRepository::new(db.pool());
    let stored = repo.get_by_id(user.id).await.unwrap().unwrap();
    assert!(stored.session_token.is_none());
    assert!(stored.reset_token.is_none());
}

#[tokio::test]
async fn test_exactly_one_user_per_email() {
    let (service, db) = service_with_db().await;

    service.register("eve@example.com", "password").await.unwrap();
    let result = service.register("eve@example.com", "password").await;
    assert!(matches!(result, Err(AuthError::AlreadyRegistered)));

    let repo = UserRepository::new(db.pool());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_tokens_are_unique_across_users() {
    let (service, db) = service_with_db().await;

    service.register("a@example.com", "pw").await.unwrap();
    service.register("b@example.com", "pw").await.unwrap();

    let session_a = service.create_session("a@example.com").await.unwrap();
    let session_b = service.create_session("b@example.com").await.unwrap();
    assert_ne!(session_a, session_b);

    let reset_a = service.issue_reset_token("a@example.com").await.unwrap();
    let reset_b = service.issue_reset_token("b@example.com").await.unwrap();
    assert_ne!(reset_a, reset_b);

    // Each token resolves to its own user
    let repo = UserRepository::new(db.pool());
    let by_session = repo
        .find_by(UserKey::SessionToken(&session_a))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_session.email, "a@example.com");

    let by_reset = repo
        .find_by(UserKey::ResetToken(&reset_b))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_reset.email, "b@example.com");
}

#[tokio::test]
async fn test_hash_is_never_cleartext() {
    let (service, db) = service_with_db().await;

    service.register("eve@example.com", "visible password").await.unwrap();

    let repo = UserRepository::new(db.pool());
    let stored = repo
        .find_by(UserKey::Email("eve@example.com"))
        .await
        .unwrap()
        .unwrap();

    assert!(!stored.password.is_empty());
    assert_ne!(stored.password, "visible password");
    assert!(!stored.password.contains("visible password"));
}
