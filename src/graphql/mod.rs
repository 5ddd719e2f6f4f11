//! GraphQL schema layer.
//!
//! Declares the `Query`/`Mutation` surface and the `User`, `Project`, and
//! `Task` object types. Every field delegates to [`crate::resolvers`]; the
//! store handle is injected once as schema data and looked up per field.

mod mutation;
mod query;
mod types;

#[cfg(test)]
mod schema_test;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Result, Schema};

use crate::db::Database;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{ProjectObject, TaskObject, UserObject};

/// Executable schema for a given store backend.
pub type AppSchema<D> = Schema<QueryRoot<D>, MutationRoot<D>, EmptySubscription>;

/// Build the schema with `db` available to every resolver.
pub fn build_schema<D: Database>(db: Arc<D>) -> AppSchema<D> {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(db)
        .finish()
}

/// Render the schema as SDL without attaching a store.
pub fn schema_sdl<D: Database>() -> String {
    Schema::build(
        QueryRoot::<D>::default(),
        MutationRoot::<D>::default(),
        EmptySubscription,
    )
    .finish()
    .sdl()
}

fn store<'a, D: Database>(ctx: &Context<'a>) -> Result<&'a D> {
    ctx.data::<Arc<D>>().map(|db| db.as_ref())
}
