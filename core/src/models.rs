use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single TODO entry as persisted by the store.
///
/// The store assigns the identifier and both timestamps; callers never set
/// them directly. `updated_at` is refreshed by the persistence layer whenever
/// the entry is updated, while `id` and `created_at` stay fixed for the
/// lifetime of the row.
///
/// # Examples
///
/// ```rust
/// use todo_core::models::Todo;
/// use chrono::Utc;
///
/// let todo = Todo {
///     id: 1,
///     subject: "write report".to_string(),
///     description: "quarterly numbers".to_string(),
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// assert!(todo.id > 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    /// Auto-increment primary key
    pub id: i64,
    /// Short task title, never empty
    pub subject: String,
    /// Free-form detail text, may be empty
    pub description: String,
    /// Creation timestamp, assigned by the store
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp, refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// Data transfer object for creating new TODO entries.
///
/// `description` defaults to the empty string when omitted from a request
/// payload; `subject` is validated as non-empty by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTodo {
    /// Short task title, must be non-empty
    pub subject: String,
    /// Free-form detail text
    #[serde(default)]
    pub description: String,
}

impl NewTodo {
    /// Create a new NewTodo from its parts.
    pub fn new(subject: String, description: String) -> Self {
        Self {
            subject,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_new_todo_construction() {
        let new_todo = NewTodo::new("subject".to_string(), "details".to_string());
        assert_eq!(new_todo.subject, "subject");
        assert_eq!(new_todo.description, "details");
    }

    #[test]
    fn test_new_todo_description_defaults_to_empty() {
        let new_todo: NewTodo = serde_json::from_str(r#"{"subject":"foo"}"#).unwrap();
        assert_eq!(new_todo.subject, "foo");
        assert_eq!(new_todo.description, "");
    }

    #[test]
    fn test_todo_json_shape() {
        let todo = Todo {
            id: 42,
            subject: "foo".to_string(),
            description: "this is foo".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(value["id"], 42);
        assert_eq!(value["subject"], "foo");
        assert_eq!(value["description"], "this is foo");
        assert!(value["created_at"].is_string());
        assert!(value["updated_at"].is_string());
    }

    #[test]
    fn test_todo_roundtrip() {
        let todo = Todo {
            id: 7,
            subject: "roundtrip".to_string(),
            description: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
