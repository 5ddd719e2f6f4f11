use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Json;
use axum::extract::State;
use axum::response::Html;
use serde::Serialize;
use tracing::instrument;

use crate::api::AppState;
use crate::db::Database;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[instrument]
pub async fn root() -> &'static str {
    crate::hello()
}

#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[instrument]
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[instrument(skip(state, req))]
pub async fn graphql<D: Database>(
    State(state): State<AppState<D>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema().execute(req.into_inner()).await.into()
}
