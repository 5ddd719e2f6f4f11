//! SQLite TaskRepository implementation.

use sqlx::{Row, SqlitePool};

use crate::db::utils::generate_entity_id;
use crate::db::{DbError, DbResult, NewTask, Task, TaskRepository};

/// SQLx-backed task repository.
pub struct SqliteTaskRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> TaskRepository for SqliteTaskRepository<'a> {
    async fn create(&self, task: &NewTask) -> DbResult<Task> {
        task.validate()?;
        let id = generate_entity_id();

        sqlx::query(
            r#"
            INSERT INTO tasks (id, title, description, completed, project_id, assignee_id)
            VALUES (?, ?, NULL, 0, ?, NULL)
            "#,
        )
        .bind(&id)
        .bind(&task.title)
        .bind(&task.project)
        .execute(self.pool)
        .await?;

        Ok(Task {
            id,
            title: task.title.clone(),
            description: None,
            completed: false,
            project: task.project.clone(),
            assignee: None,
        })
    }

    async fn get(&self, id: &str) -> DbResult<Task> {
        let row = sqlx::query(
            "SELECT id, title, description, completed, project_id, assignee_id
             FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let row = row.ok_or_else(|| DbError::not_found("Task", id))?;
        Ok(row_to_task(&row))
    }

    async fn list(&self) -> DbResult<Vec<Task>> {
        let rows = sqlx::query(
            "SELECT id, title, description, completed, project_id, assignee_id
             FROM tasks ORDER BY rowid",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(row_to_task).collect())
    }

    async fn update(&self, task: &Task) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, completed = ?, project_id = ?, assignee_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(&task.project)
        .bind(&task.assignee)
        .bind(&task.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Task", &task.id));
        }

        Ok(())
    }
}

/// Convert a database row to a Task model.
fn row_to_task(row: &sqlx::sqlite::SqliteRow) -> Task {
    Task {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        completed: row.get("completed"),
        project: row.get("project_id"),
        assignee: row.get("assignee_id"),
    }
}
