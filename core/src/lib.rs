//! TODO Core Library
//!
//! This crate provides the foundational domain models, error types, and trait
//! interfaces for the TODO service. All other crates depend on the types and
//! interfaces defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain models (Todo, NewTodo)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//!
//! # Example
//!
//! ```rust
//! use todo_core::models::NewTodo;
//!
//! let new_todo = NewTodo::new("buy milk".to_string(), "two liters".to_string());
//! assert_eq!(new_todo.subject, "buy milk");
//! ```

pub mod error;
pub mod models;
pub mod repository;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TodoError};
pub use models::{NewTodo, Todo};
pub use repository::TodoRepository;
