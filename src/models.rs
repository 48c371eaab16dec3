//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_payload() {
        let payload = r#"[
            {"id": 1, "title": "Buy milk", "completed": false},
            {"id": 2, "title": "Pay bills", "completed": true}
        ]"#;

        let todos: Vec<Todo> = serde_json::from_str(payload).expect("Parse failed");

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].title, "Buy milk");
        assert!(!todos[0].completed);
        assert_eq!(todos[1].id, 2);
        assert_eq!(todos[1].title, "Pay bills");
        assert!(todos[1].completed);
    }

    #[test]
    fn test_reject_malformed_record() {
        // Missing "completed" is not a valid Todo
        let payload = r#"[{"id": 1, "title": "Buy milk"}]"#;
        assert!(serde_json::from_str::<Vec<Todo>>(payload).is_err());
    }
}
