//! Database crate for the TODO service
//!
//! This crate provides the SQLite implementation of the TodoRepository trait,
//! offering TODO persistence with connection pooling, parameterized
//! statements, and error mapping.
//!
//! # Features
//!
//! - SQLite database support with WAL mode for better concurrency
//! - Database migrations with proper schema management
//! - Connection pooling for optimal performance
//! - In-memory database support for tests
//!
//! # Usage
//!
//! ```rust,no_run
//! use todo_database::SqliteTodoRepository;
//! use todo_core::repository::TodoRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create repository (in-memory for testing)
//!     let repo = SqliteTodoRepository::new(":memory:").await?;
//!
//!     // Run migrations
//!     repo.migrate().await?;
//!
//!     // Repository is ready to use
//!     repo.health_check().await?;
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTodoRepository;

// Re-export commonly used types from todo-core for convenience
pub use todo_core::{
    error::{Result, TodoError},
    models::{NewTodo, Todo},
    repository::TodoRepository,
};
