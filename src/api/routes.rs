//! API route configuration.

use axum::Router;
use axum::routing::get;

use super::handlers;
use super::state::AppState;
use crate::db::Database;

/// Create the API router.
///
/// `/graphql` accepts operations via POST and serves GraphiQL via GET.
pub fn create_router<D: Database>(state: AppState<D>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/graphql",
            get(handlers::graphiql).post(handlers::graphql::<D>),
        )
        .with_state(state)
}
