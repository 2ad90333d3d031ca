use thiserror::Error;

/// Result type alias for TODO operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Error types for the TODO service.
///
/// These errors cover all failure modes of TODO operations, from validation
/// failures to database errors. Each variant maps to an HTTP status code so
/// callers can distinguish outcomes without inspecting error messages.
///
/// # Examples
///
/// ```rust
/// use todo_core::error::TodoError;
///
/// let not_found = TodoError::not_found_id(42);
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.status_code(), 404);
///
/// let invalid = TodoError::empty_field("subject");
/// assert!(invalid.is_validation());
/// assert_eq!(invalid.status_code(), 400);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// TODO not found by the given identifier
    #[error("TODO not found: {0}")]
    NotFound(String),

    /// Validation error with details
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database operation error
    #[error("Database error: {0}")]
    Database(String),

    /// JSON encode/decode error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Create a not found error for a TODO ID
    pub fn not_found_id(id: i64) -> Self {
        Self::NotFound(format!("TODO with ID {id} not found"))
    }

    /// Create a validation error for an empty field
    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("Field '{field}' cannot be empty"))
    }

    /// Create a validation error for a negative pagination argument
    pub fn negative_argument(field: &str, value: i64) -> Self {
        Self::Validation(format!("Argument '{field}' cannot be negative: {value}"))
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, TodoError::Database(_))
    }

    /// Convert to the appropriate HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            TodoError::NotFound(_) => 404,
            TodoError::Validation(_) => 400,
            TodoError::Database(_) => 500,
            TodoError::Serialization(_) => 500,
            TodoError::Configuration(_) => 500,
            TodoError::Internal(_) => 500,
        }
    }
}
