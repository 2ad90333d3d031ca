//! Request and response payloads for the REST endpoints.
//!
//! Request structs are strongly typed; optional fields carry explicit
//! defaults so validation happens immediately after decode rather than on
//! loosely-typed JSON values.

use serde::{Deserialize, Serialize};
use todo_core::models::Todo;

/// Body of `POST /todos`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

/// Response of `POST /todos`
#[derive(Debug, Clone, Serialize)]
pub struct CreateTodoResponse {
    pub todo: Todo,
}

/// Query parameters of `GET /todos`, both raw strings so that non-numeric
/// input can be classified as a decode failure by the caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadTodoQuery {
    pub prev_id: Option<String>,
    pub size: Option<String>,
}

/// Response of `GET /todos`
#[derive(Debug, Clone, Serialize)]
pub struct ReadTodoResponse {
    pub todos: Vec<Todo>,
}

/// Body of `PUT /todos`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

/// Response of `PUT /todos`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTodoResponse {
    pub todo: Todo,
}

/// Body of `DELETE /todos`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeleteTodoRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
}

/// Response of `DELETE /todos`, always the empty object
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTodoResponse {}

/// Response of `GET /healthz`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthzResponse {
    pub message: String,
}
