//! Relationship resolvers, evaluated only when a nested field is requested.
//!
//! Each call is a separate store lookup; nothing is batched or cached.
//! Dangling references resolve to absence.

use tracing::instrument;

use crate::db::{
    Database, DbResult, OptionalExt, Project, ProjectRepository, Task, User, UserRepository,
};

#[instrument(skip(db, project), fields(project_id = %project.id, owner = %project.owner))]
pub async fn project_owner<D: Database>(db: &D, project: &Project) -> DbResult<Option<User>> {
    db.users().get(&project.owner).await.optional()
}

#[instrument(skip(db, project), fields(project_id = %project.id))]
pub async fn project_members<D: Database>(db: &D, project: &Project) -> DbResult<Vec<User>> {
    db.users().list_by_ids(&project.members).await
}

#[instrument(skip(db, task), fields(task_id = %task.id, project = %task.project))]
pub async fn task_project<D: Database>(db: &D, task: &Task) -> DbResult<Option<Project>> {
    db.projects().get(&task.project).await.optional()
}

#[instrument(skip(db, task), fields(task_id = %task.id))]
pub async fn task_assignee<D: Database>(db: &D, task: &Task) -> DbResult<Option<User>> {
    match &task.assignee {
        Some(user_id) => db.users().get(user_id).await.optional(),
        None => Ok(None),
    }
}
