use std::marker::PhantomData;

use async_graphql::{Context, Object, Result};

use super::store;
use super::types::{ProjectObject, TaskObject, UserObject};
use crate::db::Database;
use crate::resolvers;

pub struct QueryRoot<D>(PhantomData<fn() -> D>);

impl<D> Default for QueryRoot<D> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[Object(name = "Query")]
impl<D: Database> QueryRoot<D> {
    /// Every user, unfiltered.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let users = resolvers::users(store::<D>(ctx)?).await?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }

    /// Every project, unfiltered.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<ProjectObject<D>>> {
        let projects = resolvers::projects(store::<D>(ctx)?).await?;
        Ok(projects.into_iter().map(ProjectObject::from).collect())
    }

    /// Every task, unfiltered.
    async fn tasks(&self, ctx: &Context<'_>) -> Result<Vec<TaskObject<D>>> {
        let tasks = resolvers::tasks(store::<D>(ctx)?).await?;
        Ok(tasks.into_iter().map(TaskObject::from).collect())
    }
}
