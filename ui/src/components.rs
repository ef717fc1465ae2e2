//! Small shared presentation helpers.

use api::Priority;
use dioxus::prelude::*;

/// Colored pill showing a todo's priority.
#[component]
pub fn PriorityBadge(priority: Priority) -> Element {
    let class = match priority {
        Priority::Low => "priority-badge priority-low",
        Priority::Medium => "priority-badge priority-medium",
        Priority::High => "priority-badge priority-high",
    };

    rsx! {
        span { class: "{class}", "{priority}" }
    }
}

/// The date part of an ISO timestamp, for compact display.
pub fn short_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Flatten an API error into one user-facing line, preferring field-level
/// validation messages when the server sent them.
pub fn error_message(err: &api::ApiError) -> String {
    let fields = err.field_errors();
    if fields.is_empty() {
        err.to_string()
    } else {
        fields
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_truncates_timestamps() {
        assert_eq!(short_date("2024-06-01T08:00:00.000Z"), "2024-06-01");
        assert_eq!(short_date("2024-06-10"), "2024-06-10");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn error_message_prefers_field_errors() {
        let err = api::ApiError::Http {
            status: 400,
            message: "Validation failed".to_string(),
            errors: vec![
                api::FieldError {
                    field: "title".to_string(),
                    message: "Title is required".to_string(),
                    value: None,
                },
                api::FieldError {
                    field: "dueDate".to_string(),
                    message: "Due date must be a date".to_string(),
                    value: None,
                },
            ],
        };
        assert_eq!(
            error_message(&err),
            "Title is required, Due date must be a date"
        );

        let plain = api::ApiError::Network("offline".to_string());
        assert_eq!(error_message(&plain), "network error: offline");
    }
}
