//! Resolver layer.
//!
//! One async function per query, mutation, and relationship field. Each is
//! generic over [`Database`](crate::db::Database) and maps directly onto
//! repository calls; the GraphQL schema layer only adapts arguments and
//! return shapes around these.

mod mutation;
mod query;
mod relations;


pub use mutation::*;
pub use query::*;
pub use relations::*;
