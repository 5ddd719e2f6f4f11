use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;

use crate::cli::error::{CliError, CliResult};

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// API client for the collablite GraphQL endpoint
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. COLLABLITE_API_URL environment variable
    /// 3. Default: http://localhost:4000
    pub fn new(api_url: Option<String>) -> Self {
        let base_url = api_url
            .or_else(|| env::var("COLLABLITE_API_URL").ok())
            .unwrap_or_else(|| "http://localhost:4000".to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the GraphQL endpoint
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    /// Execute a GraphQL operation and deserialize its `data`.
    ///
    /// Any entry in the response's `errors` list fails the call.
    pub async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> CliResult<T> {
        let response = self
            .client
            .post(self.graphql_url())
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let body: GraphQlResponse<T> = Self::handle_response(response).await?;

        if !body.errors.is_empty() {
            let message = body
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CliError::GraphQl { message });
        }

        body.data.ok_or_else(|| CliError::InvalidResponse {
            message: "response contained no data".to_string(),
        })
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the deserialized response body on success,
    /// or a CliError::ApiError on non-success status codes.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        if response.status().is_success() {
            response.json().await.map_err(|e| CliError::InvalidResponse {
                message: e.to_string(),
            })
        } else {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(CliError::ApiError {
                status,
                message: error_text,
            })
        }
    }
}
