//! Store tests against an in-memory SQLite database.
//!
//! Each test opens its own connection, so each gets a fresh, empty table.

use common::{AppError, DatabaseConfig};
use domain::{INVALID_EMAIL_MESSAGE, USER_NOT_FOUND_MESSAGE};
use user_store_lib::service::{UserManager, UserService};

async fn setup() -> UserManager {
    user_store_lib::connect(&DatabaseConfig::from_url("sqlite::memory:"))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_add_user() {
    let users = setup().await;

    users
        .add_user("test_user".to_string(), "test_user@example.com".to_string())
        .await
        .unwrap();

    let all = users.list_users().await.unwrap();
    assert!(!all.is_empty());
    assert_eq!(all[0].name, "test_user");
    assert_eq!(all[0].email, "test_user@example.com");
}

#[tokio::test]
async fn test_add_user_to_populated_table() {
    let users = setup().await;
    for (name, email) in [("test_user", "test_user@example.com"), ("toto", "toto@gmail.com")] {
        users
            .add_user(name.to_string(), email.to_string())
            .await
            .unwrap();
    }
    let before = users.list_users().await.unwrap();

    let added = users
        .add_user("tata".to_string(), "tata@gmail.com".to_string())
        .await
        .unwrap();

    let after = users.list_users().await.unwrap();
    assert_eq!(after.len(), before.len() + 1);

    let matching: Vec<_> = after
        .iter()
        .filter(|user| user.name == "tata" && user.email == "tata@gmail.com")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, added.id);
    assert!(before.iter().all(|user| user.id != added.id));
}

#[tokio::test]
async fn test_add_user_assigns_id_and_timestamp() {
    let users = setup().await;

    let first = users
        .add_user("a".to_string(), "a@example.com".to_string())
        .await
        .unwrap();
    let second = users
        .add_user("b".to_string(), "b@example.com".to_string())
        .await
        .unwrap();

    assert_ne!(first.id, second.id);

    let fetched = users.get_user(second.id).await.unwrap();
    assert_eq!(fetched, second);
}

#[tokio::test]
async fn test_add_user_email_exception() {
    let users = setup().await;

    let err = users
        .add_user("test_invalid_user".to_string(), "test_invalid_email".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.to_string(), INVALID_EMAIL_MESSAGE);
    assert!(users.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_emails_are_allowed() {
    let users = setup().await;

    for _ in 0..2 {
        users
            .add_user("dup".to_string(), "dup@example.com".to_string())
            .await
            .unwrap();
    }

    assert_eq!(users.list_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let users = setup().await;

    let err = users.get_user(9999).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound));
    assert_eq!(err.to_string(), USER_NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_update_user() {
    let users = setup().await;
    let original = users
        .add_user("test_user".to_string(), "test_user@example.com".to_string())
        .await
        .unwrap();

    users
        .update_user(
            original.id,
            "updated_user".to_string(),
            "test_user@gmail.com".to_string(),
        )
        .await
        .unwrap();

    let updated = users.get_user(original.id).await.unwrap();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "updated_user");
    assert_eq!(updated.email, "test_user@gmail.com");
    assert_eq!(updated.date_added, original.date_added);
}

#[tokio::test]
async fn test_update_user_rejects_invalid_email() {
    let users = setup().await;
    let original = users
        .add_user("keep".to_string(), "keep@example.com".to_string())
        .await
        .unwrap();

    let err = users
        .update_user(original.id, "keep".to_string(), "broken".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(users.get_user(original.id).await.unwrap(), original);
}

#[tokio::test]
async fn test_invalid_update_is_not_found() {
    let users = setup().await;

    let err = users
        .update_user(
            9999,
            "test_update_user".to_string(),
            "test_update_email@example.com".to_string(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_remove_user() {
    let users = setup().await;
    users
        .add_user("tata".to_string(), "tata@gmail.com".to_string())
        .await
        .unwrap();
    users
        .add_user("toto".to_string(), "toto@gmail.com".to_string())
        .await
        .unwrap();

    let before = users.list_users().await.unwrap();
    let to_delete = before[0].id;

    users.remove_user(to_delete).await.unwrap();

    let after = users.list_users().await.unwrap();
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|user| user.id != to_delete));
    assert!(matches!(
        users.get_user(to_delete).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_invalid_delete_is_not_found() {
    let users = setup().await;

    let err = users.remove_user(9999).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_ping() {
    user_store_lib::ping(&DatabaseConfig::from_url("sqlite::memory:"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unreachable_store_surfaces_database_error() {
    let config = DatabaseConfig::from_url("sqlite:///nonexistent-dir/for/sure/users.db?mode=ro");

    let err = user_store_lib::connect(&config).await.err().unwrap();

    assert!(matches!(err, AppError::Database(_)));
}
