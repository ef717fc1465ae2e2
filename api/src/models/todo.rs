//! Todo wire types: the resource itself, the partial create/update bodies,
//! and the filter parameters that double as cache identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Completion state of a todo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Done,
}

impl TodoStatus {
    pub fn is_done(self) -> bool {
        matches!(self, TodoStatus::Done)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::Done => "done",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TodoStatus::Pending),
            "done" => Ok(TodoStatus::Done),
            _ => Err(()),
        }
    }
}

/// Priority level of a todo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(()),
        }
    }
}

/// Sort direction for collection queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// A task as the remote API returns it.
///
/// The server owns this record; the client only holds transient cached
/// copies. `completed_at` is derived server-side from the status and is
/// never written by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TodoStatus,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Body of `POST /todos`. Unset optional fields are omitted entirely.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Body of `PUT /todos/:id`, a partial update; only set fields are sent.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Aggregate counts from `GET /todos/stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TodoStats {
    pub total: u64,
    pub pending: u64,
    pub done: u64,
}

/// Filter, sort, and pagination parameters for the todo collection.
///
/// Each distinct combination is an independent cache entry;
/// [`TodoFilter::cache_key`] is the canonical serialization both the fetch
/// layer and the cache agree on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub status: Option<TodoStatus>,
    pub priority: Option<Priority>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TodoFilter {
    /// The non-empty parameters in a fixed order, ready for a query string.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.to_string()));
        }
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                pairs.push(("search", search.to_string()));
            }
        }
        if let Some(sort_by) = self.sort_by.as_deref() {
            if !sort_by.is_empty() {
                pairs.push(("sortBy", sort_by.to_string()));
            }
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }

    /// Canonical cache key for this parameter combination. Equal filters
    /// always produce equal keys, regardless of how they were built.
    pub fn cache_key(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return "todos".to_string();
        }
        let query = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("todos?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_decodes_the_wire_shape() {
        let raw = r#"{
            "_id": "665f1c2e9b1d8a0012a4f001",
            "title": "Buy milk",
            "description": "2 liters",
            "status": "done",
            "priority": "high",
            "dueDate": "2024-06-10",
            "createdAt": "2024-06-01T08:00:00.000Z",
            "updatedAt": "2024-06-05T09:30:00.000Z",
            "completedAt": "2024-06-05T09:30:00.000Z"
        }"#;
        let todo: Todo = serde_json::from_str(raw).unwrap();
        assert_eq!(todo.id, "665f1c2e9b1d8a0012a4f001");
        assert!(todo.status.is_done());
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.due_date.as_deref(), Some("2024-06-10"));
        assert!(todo.completed_at.is_some());
    }

    #[test]
    fn todo_tolerates_missing_optional_fields() {
        let raw = r#"{
            "_id": "t1",
            "title": "Bare",
            "status": "pending",
            "priority": "low",
            "createdAt": "2024-06-01T08:00:00.000Z",
            "updatedAt": "2024-06-01T08:00:00.000Z"
        }"#;
        let todo: Todo = serde_json::from_str(raw).unwrap();
        assert!(todo.description.is_none());
        assert!(todo.due_date.is_none());
        assert!(todo.completed_at.is_none());
    }

    #[test]
    fn create_body_omits_unset_fields() {
        let body = serde_json::to_value(CreateTodo {
            title: "Buy milk".to_string(),
            priority: Some(Priority::High),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["priority"], "high");
        assert!(body.get("description").is_none());
        assert!(body.get("dueDate").is_none());
    }

    #[test]
    fn update_body_is_partial() {
        let body = serde_json::to_value(UpdateTodo {
            status: Some(TodoStatus::Done),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert_eq!(body["status"], "done");
    }

    #[test]
    fn status_and_priority_parse_their_wire_names() {
        assert_eq!("pending".parse(), Ok(TodoStatus::Pending));
        assert_eq!("done".parse(), Ok(TodoStatus::Done));
        assert!("Done".parse::<TodoStatus>().is_err());

        assert_eq!("medium".parse(), Ok(Priority::Medium));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn query_pairs_skip_empty_parameters() {
        let filter = TodoFilter {
            status: Some(TodoStatus::Pending),
            search: Some(String::new()),
            limit: Some(50),
            ..Default::default()
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("status", "pending".to_string()),
                ("limit", "50".to_string()),
            ]
        );
    }

    #[test]
    fn cache_key_is_canonical() {
        assert_eq!(TodoFilter::default().cache_key(), "todos");

        let a = TodoFilter {
            status: Some(TodoStatus::Done),
            priority: Some(Priority::Low),
            sort_by: Some("dueDate".to_string()),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let b = a.clone();
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(
            a.cache_key(),
            "todos?status=done&priority=low&sortBy=dueDate&sortOrder=desc"
        );

        // A blank search does not change the identity
        let c = TodoFilter {
            search: Some(String::new()),
            ..a.clone()
        };
        assert_eq!(a.cache_key(), c.cache_key());

        // A different filter is a different entry
        let d = TodoFilter {
            status: Some(TodoStatus::Pending),
            ..a.clone()
        };
        assert_ne!(a.cache_key(), d.cache_key());
    }
}
