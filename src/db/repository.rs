//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//! Methods return `Send` futures so they can be awaited from the GraphQL
//! executor and axum handlers.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{NewProject, NewTask, NewUser, Project, Task, User},
};

/// Repository for User operations.
pub trait UserRepository {
    /// Validate and persist a new user, returning it with its generated ID.
    fn create(&self, user: &NewUser) -> impl Future<Output = DbResult<User>> + Send;

    /// Get a user by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<User>> + Send;

    /// Get all users in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<User>>> + Send;

    /// Get every user whose ID is in `ids`. Unknown IDs are skipped.
    fn list_by_ids(&self, ids: &[String]) -> impl Future<Output = DbResult<Vec<User>>> + Send;
}

/// Repository for Project operations.
pub trait ProjectRepository {
    /// Validate and persist a new project.
    fn create(&self, project: &NewProject) -> impl Future<Output = DbResult<Project>> + Send;

    /// Get a project by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Project>> + Send;

    /// Get all projects in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Project>>> + Send;
}

/// Repository for Task operations.
pub trait TaskRepository {
    /// Validate and persist a new task with default completion and no assignee.
    fn create(&self, task: &NewTask) -> impl Future<Output = DbResult<Task>> + Send;

    /// Get a task by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Task>> + Send;

    /// Get all tasks in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    /// Overwrite an existing task.
    fn update(&self, task: &Task) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync + 'static {
    type Users<'a>: UserRepository + Send + Sync
    where
        Self: 'a;
    type Projects<'a>: ProjectRepository + Send + Sync
    where
        Self: 'a;
    type Tasks<'a>: TaskRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the user repository.
    fn users(&self) -> Self::Users<'_>;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects<'_>;

    /// Get the task repository.
    fn tasks(&self) -> Self::Tasks<'_>;
}
