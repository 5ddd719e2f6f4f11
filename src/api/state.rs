//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::graphql::{AppSchema, build_schema};

/// Shared application state.
///
/// Generic over `D: Database`; the store is created by the binary and
/// injected here, then handed to the schema as resolver data.
pub struct AppState<D: Database> {
    db: Arc<D>,
    schema: AppSchema<D>,
}

// Manual Clone impl - only the Arc and the schema handle are cloned, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            schema: self.schema.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState around the given store.
    pub fn new(db: D) -> Self {
        let db = Arc::new(db);
        let schema = build_schema(Arc::clone(&db));
        Self { db, schema }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a reference to the executable schema.
    pub fn schema(&self) -> &AppSchema<D> {
        &self.schema
    }
}
