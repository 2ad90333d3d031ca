use crate::{
    error::Result,
    models::{NewTodo, Todo},
};
use async_trait::async_trait;

/// Repository trait for TODO persistence and retrieval operations
///
/// This trait defines the interface for all TODO data operations.
/// Implementations must be thread-safe and support concurrent access; the
/// store owns all persisted state and implementations hold no per-request
/// caches.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Create a new TODO
    ///
    /// # Arguments
    /// * `todo` - The new TODO data to persist
    ///
    /// # Returns
    /// * `Ok(Todo)` - The created TODO with assigned ID and timestamps
    /// * `Err(TodoError::Validation)` - If the subject is empty
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn create(&self, todo: NewTodo) -> Result<Todo>;

    /// List TODOs newest-first with cursor pagination
    ///
    /// # Arguments
    /// * `prev_id` - Only rows with `id < prev_id` are returned; 0 means no
    ///   lower bound
    /// * `size` - Maximum number of rows to return; 0 means unlimited
    ///
    /// # Returns
    /// * `Ok(Vec<Todo>)` - The matching rows ordered by id descending (may be empty)
    /// * `Err(TodoError::Validation)` - If `prev_id` or `size` is negative
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn list(&self, prev_id: i64, size: i64) -> Result<Vec<Todo>>;

    /// Update an existing TODO's subject and description
    ///
    /// The row is re-read after the update; a missing row on re-read is
    /// reported as not found. `id` and `created_at` are never changed,
    /// `updated_at` is refreshed.
    ///
    /// # Returns
    /// * `Ok(Todo)` - The updated TODO as currently persisted
    /// * `Err(TodoError::NotFound)` - If no row exists with that ID
    /// * `Err(TodoError::Validation)` - If the subject is empty
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn update(&self, id: i64, subject: &str, description: &str) -> Result<Todo>;

    /// Delete all TODOs whose id is in the given set, in a single statement
    ///
    /// An empty set deletes nothing and succeeds.
    ///
    /// # Returns
    /// * `Ok(())` - Every id in the set matched a row and was removed
    /// * `Err(TodoError::NotFound)` - If any id did not match a row
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn delete(&self, ids: &[i64]) -> Result<()>;

    /// Get repository health status for monitoring
    ///
    /// # Returns
    /// * `Ok(())` - Repository is healthy and connected
    /// * `Err(TodoError::Database)` - Repository is unhealthy
    async fn health_check(&self) -> Result<()>;
}
