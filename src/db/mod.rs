//! Storage abstraction for users, projects, and tasks.
//!
//! Business logic talks to the [`Database`] trait only; `SqliteDatabase` is
//! the concrete backend used by the server and by tests.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Stored entities (User, Project, Task) and their creation inputs
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation

mod error;
mod models;
mod repository;
pub mod sqlite;
pub mod utils;


pub use error::{DbError, DbResult, OptionalExt};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
