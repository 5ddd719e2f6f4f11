//! SQLite UserRepository implementation.

use sqlx::{Row, SqlitePool};

use crate::db::utils::generate_entity_id;
use crate::db::{DbError, DbResult, NewUser, User, UserRepository};

/// SQLx-backed user repository.
pub struct SqliteUserRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> UserRepository for SqliteUserRepository<'a> {
    async fn create(&self, user: &NewUser) -> DbResult<User> {
        user.validate()?;
        let id = generate_entity_id();

        sqlx::query("INSERT INTO users (id, username, email, password) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password)
            .execute(self.pool)
            .await?;

        Ok(User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        })
    }

    async fn get(&self, id: &str) -> DbResult<User> {
        let row = sqlx::query("SELECT id, username, email, password FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("User", id))?;
        Ok(row_to_user(&row))
    }

    async fn list(&self) -> DbResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, username, email, password FROM users ORDER BY rowid")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(row_to_user).collect())
    }

    async fn list_by_ids(&self, ids: &[String]) -> DbResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let ids_json = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
        let rows = sqlx::query(
            "SELECT id, username, email, password FROM users
             WHERE id IN (SELECT value FROM json_each(?))
             ORDER BY rowid",
        )
        .bind(&ids_json)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(row_to_user).collect())
    }
}

/// Convert a database row to a User model.
fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password: row.get("password"),
    }
}
