//! Mutations. Creation never checks that referenced records exist.

use tracing::{info, instrument};

use crate::db::{
    Database, DbResult, NewProject, NewTask, NewUser, Project, ProjectRepository, Task,
    TaskRepository, User, UserRepository,
};

#[instrument(skip(db, input), fields(username = %input.username, email = %input.email))]
pub async fn create_user<D: Database>(db: &D, input: NewUser) -> DbResult<User> {
    let user = db.users().create(&input).await?;
    info!(user_id = %user.id, "Created user");
    Ok(user)
}

/// Create a project whose member list is seeded with the owner.
#[instrument(skip(db))]
pub async fn create_project<D: Database>(
    db: &D,
    name: String,
    description: Option<String>,
    owner_id: String,
) -> DbResult<Project> {
    let input = NewProject {
        name,
        description,
        members: vec![owner_id.clone()],
        owner: owner_id,
    };

    let project = db.projects().create(&input).await?;
    info!(project_id = %project.id, "Created project");
    Ok(project)
}

#[instrument(skip(db))]
pub async fn create_task<D: Database>(db: &D, title: String, project_id: String) -> DbResult<Task> {
    let input = NewTask {
        title,
        project: project_id,
    };

    let task = db.tasks().create(&input).await?;
    info!(task_id = %task.id, "Created task");
    Ok(task)
}

/// Flip a task's completion flag and persist it.
///
/// Fails with `NotFound` before writing anything when the task is missing.
/// Concurrent toggles are not coordinated: the last write wins.
#[instrument(skip(db))]
pub async fn toggle_task_completion<D: Database>(db: &D, task_id: &str) -> DbResult<Task> {
    let tasks = db.tasks();

    let mut task = tasks.get(task_id).await?;
    task.toggle_completed();
    tasks.update(&task).await?;

    info!(task_id = %task.id, completed = task.completed, "Toggled task completion");
    Ok(task)
}
