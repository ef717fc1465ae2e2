use api::{Priority, TodoFilter};
use dioxus::prelude::*;
use ui::{use_api, use_todo_data};

/// Aggregate view: server-side counts plus a breakdown computed from a
/// large-limit list fetch.
#[component]
pub fn Analytics() -> Element {
    let client = use_api();
    let data = use_todo_data();

    let stats_client = client.clone();
    let stats_resource = use_resource(move || {
        let client = stats_client.clone();
        async move { ui::fetch_stats(&client, data).await }
    });

    let list_client = client.clone();
    let todos_resource = use_resource(move || {
        let client = list_client.clone();
        let filter = TodoFilter {
            limit: Some(1000),
            ..Default::default()
        };
        async move { ui::fetch_todos(&client, data, &filter).await }
    });

    let stats_content = match &*stats_resource.read_unchecked() {
        Some(Ok(stats)) => {
            let completion = if stats.total > 0 {
                (stats.done * 100) / stats.total
            } else {
                0
            };
            rsx! {
                div { class: "stat-row",
                    div { class: "stat-card",
                        span { class: "stat-label", "Total Tasks" }
                        span { class: "stat-value", "{stats.total}" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-label", "Pending" }
                        span { class: "stat-value stat-pending", "{stats.pending}" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-label", "Completed" }
                        span { class: "stat-value stat-done", "{stats.done}" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-label", "Completion" }
                        span { class: "stat-value", "{completion}%" }
                    }
                }
            }
        }
        Some(Err(_)) => rsx! {
            div { class: "empty-state error", "Failed to load stats" }
        },
        None => rsx! {
            div { class: "page-loading", div { class: "spinner" } }
        },
    };

    let breakdown_content = match &*todos_resource.read_unchecked() {
        Some(Ok(todos)) => {
            let total = todos.len().max(1);
            let rows = Priority::ALL.map(|priority| {
                let count = todos.iter().filter(|t| t.priority == priority).count();
                (priority, count, (count * 100) / total)
            });
            rsx! {
                div { class: "detail-card",
                    h2 { class: "card-title", "By priority" }
                    div { class: "priority-bars",
                        for (priority, count, percent) in rows {
                            div { class: "priority-bar-row", key: "{priority}",
                                span { class: "priority-bar-label", "{priority}" }
                                div { class: "priority-bar-track",
                                    div {
                                        class: "priority-bar-fill priority-{priority}",
                                        style: "width: {percent}%",
                                    }
                                }
                                span { class: "priority-bar-count", "{count}" }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(_)) => rsx! {
            div { class: "empty-state error", "Failed to load todos" }
        },
        None => rsx! {},
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "Analytics" }
                    p { class: "page-subtitle", "How your tasks are going" }
                }
            }

            {stats_content}
            {breakdown_content}
        }
    }
}
