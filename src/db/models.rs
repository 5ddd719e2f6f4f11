//! Domain models for the collablite store.
//!
//! These models are storage-agnostic. References between records are plain
//! ids and are never checked for existence when written.

use serde::{Deserialize, Serialize};

use super::{DbError, DbResult};

/// 24-character hex ID type used for all entities.
pub type Id = String;

/// A registered user. The password is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A project owned by one user and shared with a set of members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    /// Owning user ID
    pub owner: Id,
    /// Member user IDs, in the order they were stored
    #[serde(default)]
    pub members: Vec<Id>,
}

/// A unit of work inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Parent project ID
    pub project: Id,
    /// Assigned user ID
    pub assignee: Option<Id>,
}

impl Task {
    /// Flip the completion flag. Always succeeds.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

// =============================================================================
// Creation inputs
// =============================================================================

/// Fields required to create a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn validate(&self) -> DbResult<()> {
        require("User", "username", &self.username)?;
        require("User", "email", &self.email)?;
        require("User", "password", &self.password)
    }
}

/// Fields required to create a [`Project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub owner: Id,
    pub members: Vec<Id>,
}

impl NewProject {
    pub fn validate(&self) -> DbResult<()> {
        require("Project", "name", &self.name)?;
        require("Project", "owner", &self.owner)
    }
}

/// Fields required to create a [`Task`]. Everything else takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub project: Id,
}

impl NewTask {
    pub fn validate(&self) -> DbResult<()> {
        require("Task", "title", &self.title)?;
        require("Task", "project", &self.project)
    }
}

fn require(entity: &str, field: &str, value: &str) -> DbResult<()> {
    if value.is_empty() {
        return Err(DbError::Validation {
            message: format!("{}.{} is required", entity, field),
        });
    }
    Ok(())
}
