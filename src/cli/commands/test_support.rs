//! Shared fixtures for CLI command tests: a real server on an ephemeral port.

use tokio::net::TcpListener;

use crate::api::{AppState, routes};
use crate::cli::api_client::ApiClient;
use crate::db::{Database, SqliteDatabase};

/// Spawn the API on 127.0.0.1 with a fresh in-memory store and return a client for it.
pub(crate) async fn spawn_server() -> ApiClient {
    let _ = rustls::crypto::ring::default_provider().install_default();

    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");

    let app = routes::create_router(AppState::new(db));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    ApiClient::new(Some(format!("http://{}", addr)))
}

/// Pull the generated ID out of a "✓ Created ...: name (id)" message.
pub(crate) fn created_id(output: &str) -> String {
    output
        .rsplit_once('(')
        .and_then(|(_, rest)| rest.strip_suffix(')'))
        .expect("output should end with (id)")
        .to_string()
}
