//! Top-level queries: unfiltered full-collection fetches.

use tracing::{debug, instrument};

use crate::db::{
    Database, DbResult, Project, ProjectRepository, Task, TaskRepository, User, UserRepository,
};

#[instrument(skip(db))]
pub async fn users<D: Database>(db: &D) -> DbResult<Vec<User>> {
    let users = db.users().list().await?;
    debug!(count = users.len(), "Fetched users");
    Ok(users)
}

#[instrument(skip(db))]
pub async fn projects<D: Database>(db: &D) -> DbResult<Vec<Project>> {
    let projects = db.projects().list().await?;
    debug!(count = projects.len(), "Fetched projects");
    Ok(projects)
}

#[instrument(skip(db))]
pub async fn tasks<D: Database>(db: &D) -> DbResult<Vec<Task>> {
    let tasks = db.tasks().list().await?;
    debug!(count = tasks.len(), "Fetched tasks");
    Ok(tasks)
}
