//! Service integration tests: business rules end to end over SQLite.

mod support;

use std::sync::Arc;

use serde_json::json;

use common::AppError;
use domain::{UserFilter, MSG_EMAIL_INVALID, MSG_EMAIL_REQUIRED, MSG_NAME_REQUIRED};
use user_service_lib::service::{UserManager, UserService};

use support::{setup_service, setup_store, user_input};

#[tokio::test]
async fn test_user_lifecycle() {
    let service = setup_service().await;

    let alice = service
        .create_user(&user_input("Alice", "a@x.com", 30))
        .await
        .unwrap();
    assert_eq!(alice.id, 1);
    assert_eq!(alice.name, "Alice");

    let duplicate = service
        .create_user(&user_input("Bob", "a@x.com", 40))
        .await;
    assert!(matches!(duplicate, Err(AppError::DuplicateEmail(_))));

    let filter = UserFilter::default().with_age_range(Some(25), Some(35));
    let page = service.get_users(&filter).await.unwrap();
    assert!(page.users.iter().any(|u| u.id == alice.id));
    assert_eq!(page.total, 1);

    assert!(service.delete_user(alice.id).await.unwrap());
    assert!(!service.delete_user(alice.id).await.unwrap());
    assert!(service.get_user_by_id(alice.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_created_user_is_retrievable() {
    let service = setup_service().await;

    let created = service
        .create_user(&user_input("Dana", "dana@example.com", 0))
        .await
        .unwrap();
    let fetched = service.get_user_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.age, 0);
}

#[tokio::test]
async fn test_invalid_create_leaves_store_untouched() {
    let service = setup_service().await;

    let result = service
        .create_user(&json!({"name": "", "email": "", "age": 5}))
        .await;

    match result {
        Err(AppError::Validation(messages)) => assert_eq!(
            messages,
            vec![
                MSG_NAME_REQUIRED.to_string(),
                format!("{}, {}", MSG_EMAIL_REQUIRED, MSG_EMAIL_INVALID),
            ]
        ),
        other => panic!("expected validation error, got {other:?}"),
    }

    let page = service.get_users(&UserFilter::default()).await.unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_total_ignores_window() {
    let service = setup_service().await;
    for i in 0..5 {
        service
            .create_user(&user_input(&format!("User {i}"), &format!("u{i}@x.com"), 20 + i))
            .await
            .unwrap();
    }

    let filter = UserFilter::default().with_page(Some(2), Some(4));
    let page = service.get_users(&filter).await.unwrap();

    assert_eq!(page.users.len(), 1);
    assert_eq!(page.total, 5);
}

#[tokio::test]
async fn test_update_keeps_own_email() {
    let service = setup_service().await;
    let alice = service
        .create_user(&user_input("Alice", "a@x.com", 30))
        .await
        .unwrap();

    let updated = service
        .update_user(alice.id, &json!({"email": "a@x.com", "name": "Alicia"}))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.email, "a@x.com");
    assert!(updated.updated_at >= alice.updated_at);
}

#[tokio::test]
async fn test_update_rejects_email_of_another_user() {
    let service = setup_service().await;
    service
        .create_user(&user_input("Alice", "a@x.com", 30))
        .await
        .unwrap();
    let bob = service
        .create_user(&user_input("Bob", "b@x.com", 40))
        .await
        .unwrap();

    let result = service.update_user(bob.id, &json!({"email": "a@x.com"})).await;
    assert!(matches!(result, Err(AppError::DuplicateEmail(e)) if e == "a@x.com"));

    let bob_after = service.get_user_by_id(bob.id).await.unwrap().unwrap();
    assert_eq!(bob_after, bob);
}

#[tokio::test]
async fn test_update_missing_user() {
    let service = setup_service().await;

    let result = service
        .update_user(404, &json!({"name": "Nobody"}))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_empty_update_refreshes_timestamp_only() {
    let service = setup_service().await;
    let alice = service
        .create_user(&user_input("Alice", "a@x.com", 30))
        .await
        .unwrap();

    let updated = service
        .update_user(alice.id, &json!({}))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, alice.name);
    assert_eq!(updated.email, alice.email);
    assert_eq!(updated.age, alice.age);
    assert!(updated.updated_at >= alice.updated_at);
}

#[tokio::test]
async fn test_concurrent_creates_with_same_email() {
    let service = Arc::new(UserManager::new(Arc::new(setup_store().await)));

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .create_user(&user_input("First", "race@x.com", 20))
                .await
        })
    };
    let second = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .create_user(&user_input("Second", "race@x.com", 21))
                .await
        })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let created = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::DuplicateEmail(_))))
        .count();

    assert_eq!(created, 1);
    assert_eq!(duplicates, 1);
    assert_eq!(
        service.get_users(&UserFilter::default()).await.unwrap().total,
        1
    );
}
