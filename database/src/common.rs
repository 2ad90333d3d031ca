use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use todo_core::{
    error::{Result, TodoError},
    models::Todo,
};

/// Convert a SQLite row to the Todo model
pub fn row_to_todo(row: &SqliteRow) -> Result<Todo> {
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| TodoError::Database(format!("Invalid created_at column: {e}")))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| TodoError::Database(format!("Invalid updated_at column: {e}")))?;

    Ok(Todo {
        id: row.get("id"),
        subject: row.get("subject"),
        description: row.get("description"),
        created_at,
        updated_at,
    })
}

/// Convert a SQLx error to a TodoError
pub fn sqlx_error_to_todo_error(err: sqlx::Error) -> TodoError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if message.contains("NOT NULL constraint failed") {
                TodoError::Validation(format!("Database constraint violation: {message}"))
            } else {
                TodoError::Database(format!("Database error: {message}"))
            }
        }
        sqlx::Error::RowNotFound => TodoError::NotFound("Row not found".to_string()),
        sqlx::Error::PoolTimedOut => {
            TodoError::Database("Database connection pool timed out".to_string())
        }
        _ => TodoError::Database(format!("Database error: {err}")),
    }
}
