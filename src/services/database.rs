use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::errors::StoreError;
use crate::models::user::User;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
";

/// Thin typed facade over the `users` table. Constructed once at startup
/// and cloned into every handler; the pool manages connection lifetimes,
/// so a failed request cannot leak a held connection into another.
///
/// Every method issues exactly one statement. No transactions, no
/// batching, no retries.
#[derive(Clone)]
pub struct DatabaseService {
    pool: SqlitePool,
}

impl DatabaseService {
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // A :memory: database exists per connection, so the pool must
        // never open a second one.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Every row, no ordering guarantee, no pagination.
    pub async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email, created_at FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// `Ok(None)` for a missing row; absence is not an error here.
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Inserts a row; the store assigns `id` and `created_at`, and
    /// RETURNING hands back the full created row in the same statement.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES (?, ?)
             RETURNING id, name, email, created_at",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    /// Overwrites both mutable fields; `id` and `created_at` are untouched.
    pub async fn update_user(&self, id: i64, name: &str, email: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = ?, email = ? WHERE id = ?
             RETURNING id, name, email, created_at",
        )
        .bind(name)
        .bind(email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Removes the row and returns it as it was before deletion.
    pub async fn delete_user(&self, id: i64) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "DELETE FROM users WHERE id = ?
             RETURNING id, name, email, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }
}
