use std::marker::PhantomData;

use async_graphql::{Context, ID, Object, Result};

use super::store;
use super::types::{ProjectObject, TaskObject, UserObject};
use crate::db::{Database, NewUser};
use crate::resolvers;

pub struct MutationRoot<D>(PhantomData<fn() -> D>);

impl<D> Default for MutationRoot<D> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[Object(name = "Mutation")]
impl<D: Database> MutationRoot<D> {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<UserObject> {
        let input = NewUser {
            username,
            email,
            password,
        };
        let user = resolvers::create_user(store::<D>(ctx)?, input).await?;
        Ok(user.into())
    }

    /// Create a project; the owner becomes its first member.
    async fn create_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: Option<String>,
        owner_id: ID,
    ) -> Result<ProjectObject<D>> {
        let project =
            resolvers::create_project(store::<D>(ctx)?, name, description, owner_id.0).await?;
        Ok(project.into())
    }

    async fn create_task(
        &self,
        ctx: &Context<'_>,
        title: String,
        project_id: ID,
    ) -> Result<TaskObject<D>> {
        let task = resolvers::create_task(store::<D>(ctx)?, title, project_id.0).await?;
        Ok(task.into())
    }

    /// Flip a task between complete and incomplete.
    async fn toggle_task_completion(
        &self,
        ctx: &Context<'_>,
        task_id: ID,
    ) -> Result<TaskObject<D>> {
        let task = resolvers::toggle_task_completion(store::<D>(ctx)?, &task_id).await?;
        Ok(task.into())
    }
}
