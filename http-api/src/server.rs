//! REST server for the TODO service
//!
//! Builds the axum router exposing the health endpoint and the `/todos`
//! resource, with method-based dispatch to create/read/update/delete.
//! Request bodies are decoded manually so that malformed JSON is classified
//! as a serialization failure rather than axum's default rejection.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

use crate::{
    error::ApiError,
    handler::TodoHandler,
    messages::{
        CreateTodoRequest, DeleteTodoRequest, HealthzResponse, ReadTodoQuery, UpdateTodoRequest,
    },
};
use todo_core::TodoRepository;

/// Shared server state for route handlers
#[derive(Clone)]
pub struct ApiState<R> {
    pub handler: TodoHandler<R>,
}

/// REST API server over a TODO repository
pub struct TodoApi<R> {
    handler: TodoHandler<R>,
}

impl<R: TodoRepository + 'static> TodoApi<R> {
    /// Create a new API server backed by the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            handler: TodoHandler::new(repository),
        }
    }

    /// Bind the listener and serve until the process is stopped
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.create_router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting TODO server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Create the router with all endpoints
    ///
    /// Unmatched methods on `/todos` answer 405 via the method router.
    pub fn create_router(self) -> Router {
        let state = Arc::new(ApiState {
            handler: self.handler,
        });

        Router::new()
            .route("/healthz", get(healthz_handler))
            .route(
                "/todos",
                get(read_handler::<R>)
                    .post(create_handler::<R>)
                    .put(update_handler::<R>)
                    .delete(delete_handler::<R>),
            )
            .with_state(state)
    }
}

/// Health check endpoint, always reports OK
async fn healthz_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse {
        message: "OK".to_string(),
    })
}

async fn create_handler<R: TodoRepository>(
    State(state): State<Arc<ApiState<R>>>,
    body: Bytes,
) -> Response {
    let req: CreateTodoRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => return ApiError::Serialization(format!("json decode: {e}")).into_response(),
    };

    match state.handler.create(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

async fn read_handler<R: TodoRepository>(
    State(state): State<Arc<ApiState<R>>>,
    Query(query): Query<ReadTodoQuery>,
) -> Response {
    // Absent parameters fall back to 0; non-numeric input is a decode
    // failure, negative values are rejected by the repository.
    let prev_id = match parse_query_param("prev_id", query.prev_id.as_deref()) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };
    let size = match parse_query_param("size", query.size.as_deref()) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match state.handler.read(prev_id, size).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

async fn update_handler<R: TodoRepository>(
    State(state): State<Arc<ApiState<R>>>,
    body: Bytes,
) -> Response {
    let req: UpdateTodoRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => return ApiError::Serialization(format!("json decode: {e}")).into_response(),
    };

    match state.handler.update(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

async fn delete_handler<R: TodoRepository>(
    State(state): State<Arc<ApiState<R>>>,
    body: Bytes,
) -> Response {
    let req: DeleteTodoRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => return ApiError::Serialization(format!("json decode: {e}")).into_response(),
    };

    match state.handler.delete(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

fn parse_query_param(name: &str, raw: Option<&str>) -> Result<i64, ApiError> {
    match raw {
        None | Some("") => Ok(0),
        Some(value) => value
            .parse::<i64>()
            .map_err(|e| ApiError::Serialization(format!("get {name}: {e}"))),
    }
}
