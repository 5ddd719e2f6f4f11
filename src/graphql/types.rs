//! GraphQL object types.
//!
//! `User` has no relationships and is a plain field set. `Project` and
//! `Task` wrap their stored model and resolve references lazily, so they
//! carry the backend type to find the store at field time.

use std::marker::PhantomData;

use async_graphql::{Context, ID, Object, Result, SimpleObject};

use super::store;
use crate::db::{Database, Project, Task, User};
use crate::resolvers;

/// A registered user. The stored password is never exposed.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub username: String,
    pub email: String,
}

impl From<User> for UserObject {
    fn from(u: User) -> Self {
        Self {
            id: ID(u.id),
            username: u.username,
            email: u.email,
        }
    }
}

pub struct ProjectObject<D> {
    project: Project,
    _db: PhantomData<fn() -> D>,
}

impl<D> From<Project> for ProjectObject<D> {
    fn from(project: Project) -> Self {
        Self {
            project,
            _db: PhantomData,
        }
    }
}

/// A project owned by one user and shared with its members.
#[Object(name = "Project")]
impl<D: Database> ProjectObject<D> {
    async fn id(&self) -> ID {
        ID(self.project.id.clone())
    }

    async fn name(&self) -> &str {
        &self.project.name
    }

    async fn description(&self) -> Option<&str> {
        self.project.description.as_deref()
    }

    /// Null when the stored owner no longer resolves to a user.
    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let owner = resolvers::project_owner(store::<D>(ctx)?, &self.project).await?;
        Ok(owner.map(UserObject::from))
    }

    /// Users whose IDs are in the stored member list.
    async fn members(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let members = resolvers::project_members(store::<D>(ctx)?, &self.project).await?;
        Ok(members.into_iter().map(UserObject::from).collect())
    }
}

pub struct TaskObject<D> {
    task: Task,
    _db: PhantomData<fn() -> D>,
}

impl<D> From<Task> for TaskObject<D> {
    fn from(task: Task) -> Self {
        Self {
            task,
            _db: PhantomData,
        }
    }
}

/// A unit of work inside a project.
#[Object(name = "Task")]
impl<D: Database> TaskObject<D> {
    async fn id(&self) -> ID {
        ID(self.task.id.clone())
    }

    async fn title(&self) -> &str {
        &self.task.title
    }

    async fn description(&self) -> Option<&str> {
        self.task.description.as_deref()
    }

    async fn completed(&self) -> bool {
        self.task.completed
    }

    /// Null when the stored project no longer resolves.
    async fn project(&self, ctx: &Context<'_>) -> Result<Option<ProjectObject<D>>> {
        let project = resolvers::task_project(store::<D>(ctx)?, &self.task).await?;
        Ok(project.map(ProjectObject::from))
    }

    async fn assignee(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let assignee = resolvers::task_assignee(store::<D>(ctx)?, &self.task).await?;
        Ok(assignee.map(UserObject::from))
    }
}
