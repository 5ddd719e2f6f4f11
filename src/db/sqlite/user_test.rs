//! Tests for SqliteUserRepository.

use crate::db::{Database, DbError, NewUser, SqliteDatabase, UserRepository};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{}@x.com", username),
        password: "p".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn user_create_and_get() {
    let db = setup_db().await;
    let users = db.users();

    let created = users
        .create(&new_user("alice"))
        .await
        .expect("Create should succeed");
    assert_eq!(created.id.len(), 24);
    assert_eq!(created.username, "alice");

    let retrieved = users.get(&created.id).await.expect("Get should succeed");
    assert_eq!(retrieved, created);
    // Stored verbatim
    assert_eq!(retrieved.password, "p");
}

#[tokio::test(flavor = "multi_thread")]
async fn user_get_nonexistent_returns_not_found() {
    let db = setup_db().await;

    let result = db.users().get("nonexistent").await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn user_duplicates_are_allowed() {
    let db = setup_db().await;
    let users = db.users();

    let first = users.create(&new_user("alice")).await.unwrap();
    let second = users.create(&new_user("alice")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(users.list().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn user_create_with_empty_field_persists_nothing() {
    let db = setup_db().await;
    let users = db.users();

    let result = users
        .create(&NewUser {
            username: String::new(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbError::Validation { .. })));
    assert!(users.list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn user_list_preserves_insertion_order() {
    let db = setup_db().await;
    let users = db.users();

    for name in ["carol", "alice", "bob"] {
        users.create(&new_user(name)).await.unwrap();
    }

    let names: Vec<String> = users
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, vec!["carol", "alice", "bob"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn user_list_by_ids_skips_unknown_ids() {
    let db = setup_db().await;
    let users = db.users();

    let alice = users.create(&new_user("alice")).await.unwrap();
    let bob = users.create(&new_user("bob")).await.unwrap();
    users.create(&new_user("carol")).await.unwrap();

    let found = users
        .list_by_ids(&[bob.id.clone(), "ghost".to_string(), alice.id.clone()])
        .await
        .unwrap();

    let ids: Vec<String> = found.into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![alice.id, bob.id]);
}

#[tokio::test(flavor = "multi_thread")]
async fn user_list_by_ids_empty_input() {
    let db = setup_db().await;
    db.users().create(&new_user("alice")).await.unwrap();

    let found = db.users().list_by_ids(&[]).await.unwrap();
    assert!(found.is_empty());
}
