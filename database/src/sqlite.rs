use crate::common::{row_to_todo, sqlx_error_to_todo_error};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::collections::BTreeSet;
use todo_core::{
    error::{Result, TodoError},
    models::{NewTodo, Todo},
    repository::TodoRepository,
};

/// SQLite implementation of the TodoRepository trait
///
/// Persists TODO entries using SQLite with connection pooling and
/// parameterized statements. Timestamps are assigned here, so they are
/// authoritative for every row that passes through this repository.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Create a new SQLite repository with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (file path or `:memory:`)
    ///
    /// # Returns
    /// * `Ok(SqliteTodoRepository)` - Successfully connected repository
    /// * `Err(TodoError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use todo_database::SqliteTodoRepository;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let repo = SqliteTodoRepository::new(":memory:").await?;
    ///
    /// // File-based database
    /// let repo = SqliteTodoRepository::new("sqlite:///tmp/todos.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str) -> Result<Self> {
        // Handle different database URL formats
        let db_url = if database_url.starts_with(":memory:") {
            database_url.to_string()
        } else if database_url.starts_with("sqlite://") {
            database_url.to_string()
        } else {
            format!("sqlite://{database_url}")
        };

        // Create database if it doesn't exist (for file-based databases)
        if !db_url.contains(":memory:") && !Sqlite::database_exists(&db_url).await.unwrap_or(false)
        {
            match Sqlite::create_database(&db_url).await {
                Ok(_) => tracing::info!("Database created successfully"),
                Err(error) => {
                    tracing::error!("Error creating database: {}", error);
                    return Err(TodoError::Database(format!(
                        "Failed to create database: {error}"
                    )));
                }
            }
        }

        let connect_options = if db_url.contains(":memory:") {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(&db_url)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Memory)
                .busy_timeout(std::time::Duration::from_secs(5))
        } else {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(db_url.replace("sqlite://", ""))
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .busy_timeout(std::time::Duration::from_secs(5))
        };

        let pool = SqlitePool::connect_with(connect_options)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    ///
    /// Applies all pending migrations to bring the schema up to date. Call
    /// this after creating a new repository instance.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Migration failed: {e}")))?;

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// Primarily intended for tests that need direct SQL execution.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Fetch a single row by id, mapping a missing row to NotFound.
    async fn fetch_by_id(&self, id: i64) -> Result<Todo> {
        let row = sqlx::query(
            "SELECT id, subject, description, created_at, updated_at FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_todo_error)?;

        match row {
            Some(row) => row_to_todo(&row),
            None => Err(TodoError::not_found_id(id)),
        }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, todo: NewTodo) -> Result<Todo> {
        if todo.subject.trim().is_empty() {
            return Err(TodoError::empty_field("subject"));
        }

        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO todos (subject, description, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&todo.subject)
        .bind(&todo.description)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(sqlx_error_to_todo_error)?;

        // Re-read the inserted row so the returned timestamps are exactly
        // what the store persisted.
        let id = result.last_insert_rowid();
        self.fetch_by_id(id).await
    }

    async fn list(&self, prev_id: i64, size: i64) -> Result<Vec<Todo>> {
        if prev_id < 0 {
            return Err(TodoError::negative_argument("prev_id", prev_id));
        }
        if size < 0 {
            return Err(TodoError::negative_argument("size", size));
        }

        // LIMIT -1 means "no limit" in SQLite
        let limit = if size == 0 { -1 } else { size };

        let rows = if prev_id == 0 {
            sqlx::query(
                "SELECT id, subject, description, created_at, updated_at FROM todos \
                 ORDER BY id DESC LIMIT ?",
            )
            .bind(limit)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query(
                "SELECT id, subject, description, created_at, updated_at FROM todos \
                 WHERE id < ? ORDER BY id DESC LIMIT ?",
            )
            .bind(prev_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(sqlx_error_to_todo_error)?;

        let mut todos = Vec::with_capacity(rows.len());
        for row in &rows {
            todos.push(row_to_todo(row)?);
        }

        Ok(todos)
    }

    async fn update(&self, id: i64, subject: &str, description: &str) -> Result<Todo> {
        if subject.trim().is_empty() {
            return Err(TodoError::empty_field("subject"));
        }

        let now = Utc::now();

        // The affected-row count is deliberately not consulted here; a row
        // that never existed surfaces as NotFound on the re-read below.
        sqlx::query("UPDATE todos SET subject = ?, description = ?, updated_at = ? WHERE id = ?")
            .bind(subject)
            .bind(description)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        self.fetch_by_id(id).await
    }

    async fn delete(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        // The input is a set; repeated ids must not skew the matched-row
        // comparison below.
        let unique: BTreeSet<i64> = ids.iter().copied().collect();

        // One positional bind per id, never string interpolation.
        let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
            sqlx::QueryBuilder::new("DELETE FROM todos WHERE id IN (");
        let mut separated = query_builder.separated(", ");
        for id in &unique {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let result = query_builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        if result.rows_affected() != unique.len() as u64 {
            return Err(TodoError::NotFound(format!(
                "Deleted {} of {} TODOs, some IDs did not exist",
                result.rows_affected(),
                unique.len()
            )));
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Health check failed: {e}")))?;

        Ok(())
    }
}
