//! SQLite ProjectRepository implementation.

use sqlx::{Row, SqlitePool};

use crate::db::utils::generate_entity_id;
use crate::db::{DbError, DbResult, NewProject, Project, ProjectRepository};

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> ProjectRepository for SqliteProjectRepository<'a> {
    async fn create(&self, project: &NewProject) -> DbResult<Project> {
        project.validate()?;
        let id = generate_entity_id();

        let members_json =
            serde_json::to_string(&project.members).unwrap_or_else(|_| "[]".to_string());

        sqlx::query(
            "INSERT INTO projects (id, name, description, owner_id, members) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.owner)
        .bind(&members_json)
        .execute(self.pool)
        .await?;

        Ok(Project {
            id,
            name: project.name.clone(),
            description: project.description.clone(),
            owner: project.owner.clone(),
            members: project.members.clone(),
        })
    }

    async fn get(&self, id: &str) -> DbResult<Project> {
        let row = sqlx::query(
            "SELECT id, name, description, owner_id, members FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let row = row.ok_or_else(|| DbError::not_found("Project", id))?;
        Ok(row_to_project(&row))
    }

    async fn list(&self) -> DbResult<Vec<Project>> {
        let rows = sqlx::query(
            "SELECT id, name, description, owner_id, members FROM projects ORDER BY rowid",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(row_to_project).collect())
    }
}

/// Convert a database row to a Project model.
fn row_to_project(row: &sqlx::sqlite::SqliteRow) -> Project {
    Project {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        owner: row.get("owner_id"),
        members: {
            let members_json: Option<String> = row.get("members");
            members_json
                .and_then(|s| serde_json::from_str(&s).ok())
                .unwrap_or_default()
        },
    }
}
