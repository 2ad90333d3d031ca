//! HTTP API crate for the TODO service
//!
//! Exposes the REST surface over any [`todo_core::TodoRepository`]:
//! an axum router with a health endpoint and the `/todos` CRUD endpoint
//! dispatching by HTTP method, JSON request/response types, and the
//! error-to-status mapping.

pub mod error;
pub mod handler;
pub mod messages;
pub mod server;

pub use error::ApiError;
pub use handler::TodoHandler;
pub use server::TodoApi;
