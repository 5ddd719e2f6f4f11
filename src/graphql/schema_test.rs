//! End-to-end tests executing GraphQL operations against an in-memory store.

use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::{Value, json};

use crate::db::{Database, SqliteDatabase};
use crate::graphql::{AppSchema, build_schema, schema_sdl};

async fn test_schema() -> AppSchema<SqliteDatabase> {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    build_schema(Arc::new(db))
}

/// Execute an operation that must succeed and return its `data` as JSON.
async fn run(schema: &AppSchema<SqliteDatabase>, query: &str, variables: Value) -> Value {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

async fn create_user(schema: &AppSchema<SqliteDatabase>, username: &str) -> String {
    let data = run(
        schema,
        "mutation($u: String!, $e: String!, $p: String!) {
            createUser(username: $u, email: $e, password: $p) { id }
        }",
        json!({"u": username, "e": format!("{}@x.com", username), "p": "p"}),
    )
    .await;
    data["createUser"]["id"].as_str().unwrap().to_string()
}

const CREATE_PROJECT: &str = "mutation($name: String!, $description: String, $ownerId: ID!) {
    createProject(name: $name, description: $description, ownerId: $ownerId) {
        id name description owner { id username } members { id }
    }
}";

const CREATE_TASK: &str = "mutation($title: String!, $projectId: ID!) {
    createTask(title: $title, projectId: $projectId) {
        id title description completed assignee { id } project { id }
    }
}";

const TOGGLE: &str = "mutation($taskId: ID!) {
    toggleTaskCompletion(taskId: $taskId) { id completed }
}";

#[tokio::test(flavor = "multi_thread")]
async fn create_user_returns_public_fields() {
    let schema = test_schema().await;

    let data = run(
        &schema,
        r#"mutation { createUser(username: "alice", email: "a@x.com", password: "p") { id username email } }"#,
        json!({}),
    )
    .await;

    let user = &data["createUser"];
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "a@x.com");
    assert_eq!(user["id"].as_str().unwrap().len(), 24);
}

#[tokio::test(flavor = "multi_thread")]
async fn user_type_hides_password() {
    let schema = test_schema().await;

    let data = run(
        &schema,
        r#"{ __type(name: "User") { fields { name } } }"#,
        json!({}),
    )
    .await;

    let names: Vec<&str> = data["__type"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["id", "username", "email"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn lifecycle_scenario() {
    let schema = test_schema().await;
    let user_id = create_user(&schema, "alice").await;

    let data = run(
        &schema,
        CREATE_PROJECT,
        json!({"name": "P1", "ownerId": user_id}),
    )
    .await;
    let project = &data["createProject"];
    assert_eq!(project["name"], "P1");
    assert!(project["description"].is_null());
    assert_eq!(project["owner"]["id"], user_id.as_str());
    assert_eq!(project["owner"]["username"], "alice");
    assert_eq!(project["members"], json!([{"id": user_id}]));
    let project_id = project["id"].as_str().unwrap().to_string();

    let data = run(
        &schema,
        CREATE_TASK,
        json!({"title": "T1", "projectId": project_id}),
    )
    .await;
    let task = &data["createTask"];
    assert_eq!(task["title"], "T1");
    assert_eq!(task["completed"], false);
    assert!(task["description"].is_null());
    assert!(task["assignee"].is_null());
    assert_eq!(task["project"]["id"], project_id.as_str());
    let task_id = task["id"].as_str().unwrap().to_string();

    let data = run(&schema, TOGGLE, json!({"taskId": task_id})).await;
    assert_eq!(data["toggleTaskCompletion"]["id"], task_id.as_str());
    assert_eq!(data["toggleTaskCompletion"]["completed"], true);

    let data = run(&schema, TOGGLE, json!({"taskId": task_id})).await;
    assert_eq!(data["toggleTaskCompletion"]["completed"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn toggle_unknown_task_is_an_operation_error() {
    let schema = test_schema().await;

    let response = schema
        .execute(
            Request::new(TOGGLE).variables(Variables::from_json(json!({"taskId": "does-not-exist"}))),
        )
        .await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("not found"));
    assert_eq!(response.data.into_json().unwrap(), Value::Null);

    let data = run(&schema, "{ tasks { id } }", json!({})).await;
    assert_eq!(data["tasks"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_project_with_unknown_owner_has_null_owner() {
    let schema = test_schema().await;

    let data = run(
        &schema,
        CREATE_PROJECT,
        json!({"name": "Orphan", "description": "nobody home", "ownerId": "ghost"}),
    )
    .await;

    let project = &data["createProject"];
    assert_eq!(project["description"], "nobody home");
    assert!(project["owner"].is_null());
    // The dangling member ID is stored but does not resolve
    assert_eq!(project["members"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn task_with_dangling_project_resolves_null() {
    let schema = test_schema().await;

    run(
        &schema,
        CREATE_TASK,
        json!({"title": "Loose end", "projectId": "no-such-project"}),
    )
    .await;

    let data = run(
        &schema,
        "{ tasks { title project { id name } } }",
        json!({}),
    )
    .await;
    assert_eq!(
        data["tasks"],
        json!([{"title": "Loose end", "project": null}])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn queries_return_full_collections() {
    let schema = test_schema().await;
    let alice = create_user(&schema, "alice").await;
    let bob = create_user(&schema, "bob").await;

    for owner in [&alice, &bob] {
        let data = run(
            &schema,
            CREATE_PROJECT,
            json!({"name": format!("Project of {}", owner), "ownerId": owner}),
        )
        .await;
        let project_id = data["createProject"]["id"].as_str().unwrap().to_string();
        run(
            &schema,
            CREATE_TASK,
            json!({"title": "Task", "projectId": project_id}),
        )
        .await;
    }

    let data = run(
        &schema,
        "{ users { username } projects { owner { username } } tasks { project { owner { username } } } }",
        json!({}),
    )
    .await;

    assert_eq!(
        data["users"],
        json!([{"username": "alice"}, {"username": "bob"}])
    );
    assert_eq!(
        data["projects"],
        json!([{"owner": {"username": "alice"}}, {"owner": {"username": "bob"}}])
    );
    assert_eq!(
        data["tasks"],
        json!([
            {"project": {"owner": {"username": "alice"}}},
            {"project": {"owner": {"username": "bob"}}}
        ])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_required_argument_is_rejected_before_resolving() {
    let schema = test_schema().await;

    let response = schema
        .execute(r#"mutation { createUser(username: "alice", email: "a@x.com") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());

    let data = run(&schema, "{ users { id } }", json!({})).await;
    assert_eq!(data["users"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_required_argument_fails_validation() {
    let schema = test_schema().await;

    let response = schema
        .execute(r#"mutation { createTask(title: "", projectId: "p1") { id } }"#)
        .await;
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("Task.title is required"));
}

#[test]
fn sdl_declares_operation_surface() {
    let sdl = schema_sdl::<SqliteDatabase>();

    for expected in [
        "type Query",
        "type Mutation",
        "type User",
        "type Project",
        "type Task",
        "toggleTaskCompletion(taskId: ID!): Task!",
        "users: [User!]!",
        "projects: [Project!]!",
        "tasks: [Task!]!",
        "completed: Boolean!",
    ] {
        assert!(sdl.contains(expected), "SDL missing `{}`:\n{}", expected, sdl);
    }
}
