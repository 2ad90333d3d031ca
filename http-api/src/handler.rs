//! TODO request handler
//!
//! Bridges the decoded REST payloads with a [`TodoRepository`], applying
//! boundary validation before the repository is touched. The repository
//! re-validates business rules on its own, so these checks are defense in
//! depth rather than the single gate.

use crate::messages::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    ReadTodoResponse, UpdateTodoRequest, UpdateTodoResponse,
};
use std::sync::Arc;
use todo_core::{error::Result, NewTodo, TodoError, TodoRepository};

/// Handler that executes the REST operations against a repository
#[derive(Clone)]
pub struct TodoHandler<R> {
    repository: Arc<R>,
}

impl<R> TodoHandler<R> {
    /// Create a new TODO handler
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get a clone of the repository Arc
    pub fn repository(&self) -> Arc<R> {
        self.repository.clone()
    }
}

impl<R: TodoRepository> TodoHandler<R> {
    /// Handle the endpoint that creates a TODO.
    pub async fn create(&self, req: CreateTodoRequest) -> Result<CreateTodoResponse> {
        if req.subject.trim().is_empty() {
            return Err(TodoError::empty_field("subject"));
        }

        let todo = self
            .repository
            .create(NewTodo::new(req.subject, req.description))
            .await?;

        Ok(CreateTodoResponse { todo })
    }

    /// Handle the endpoint that reads TODOs with cursor pagination.
    pub async fn read(&self, prev_id: i64, size: i64) -> Result<ReadTodoResponse> {
        let todos = self.repository.list(prev_id, size).await?;
        Ok(ReadTodoResponse { todos })
    }

    /// Handle the endpoint that updates a TODO.
    pub async fn update(&self, req: UpdateTodoRequest) -> Result<UpdateTodoResponse> {
        if req.id == 0 {
            return Err(TodoError::Validation("Field 'id' is required".to_string()));
        }
        if req.subject.trim().is_empty() {
            return Err(TodoError::empty_field("subject"));
        }

        let todo = self
            .repository
            .update(req.id, &req.subject, &req.description)
            .await?;

        Ok(UpdateTodoResponse { todo })
    }

    /// Handle the endpoint that deletes TODOs by id set.
    pub async fn delete(&self, req: DeleteTodoRequest) -> Result<DeleteTodoResponse> {
        if req.ids.is_empty() {
            return Err(TodoError::empty_field("ids"));
        }

        self.repository.delete(&req.ids).await?;

        Ok(DeleteTodoResponse {})
    }
}
