use api::{TodoStatus, UpdateTodo};
use dioxus::prelude::*;
use ui::{use_api, use_todo_data, PriorityBadge};

use crate::Route;

/// Single-todo view with inline editing, toggle, and delete.
#[component]
pub fn TodoDetail(id: String) -> Element {
    // Track the id in a signal so the resource re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let client = use_api();
    let data = use_todo_data();
    let nav = use_navigator();

    let mut editing = use_signal(|| false);
    let mut edit_title = use_signal(String::new);
    let mut edit_description = use_signal(String::new);
    let mut edit_priority = use_signal(|| "medium".to_string());
    let mut edit_due = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let resource_client = client.clone();
    let mut todo_resource = use_resource(move || {
        let client = resource_client.clone();
        let id = id_signal();
        async move { ui::fetch_todo(&client, data, &id).await }
    });

    let start_edit = move |_| {
        if let Some(Ok(todo)) = &*todo_resource.peek() {
            edit_title.set(todo.title.clone());
            edit_description.set(todo.description.clone().unwrap_or_default());
            edit_priority.set(todo.priority.to_string());
            edit_due.set(
                todo.due_date
                    .as_deref()
                    .map(ui::short_date)
                    .unwrap_or_default()
                    .to_string(),
            );
            error.set(None);
            editing.set(true);
        }
    };

    let save_client = client.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let client = save_client.clone();
        spawn(async move {
            let input = UpdateTodo {
                title: Some(edit_title().trim().to_string()),
                description: Some(edit_description()),
                priority: edit_priority().parse().ok(),
                due_date: (!edit_due().is_empty()).then(|| edit_due()),
                ..Default::default()
            };
            match ui::update_todo(&client, data, &id_signal(), &input).await {
                Ok(_) => {
                    editing.set(false);
                    todo_resource.restart();
                }
                Err(err) => error.set(Some(ui::error_message(&err))),
            }
        });
    };

    let toggle_client = client.clone();
    let handle_toggle = move |_| {
        let client = toggle_client.clone();
        spawn(async move {
            match ui::toggle_todo(&client, data, &id_signal()).await {
                Ok(_) => todo_resource.restart(),
                Err(err) => error.set(Some(ui::error_message(&err))),
            }
        });
    };

    let delete_client = client.clone();
    let handle_delete = move |_| {
        let client = delete_client.clone();
        spawn(async move {
            match ui::delete_todo(&client, data, &id_signal()).await {
                Ok(()) => {
                    nav.replace(Route::Todos {});
                }
                Err(err) => error.set(Some(ui::error_message(&err))),
            }
        });
    };

    let detail_content = match &*todo_resource.read_unchecked() {
        Some(Ok(todo)) => rsx! {
            div { class: "detail-card",
                if editing() {
                    form { onsubmit: handle_save,
                        div { class: "form-field",
                            label { r#for: "edit-title", "Title" }
                            input {
                                id: "edit-title",
                                class: "form-input",
                                r#type: "text",
                                value: edit_title(),
                                oninput: move |evt: FormEvent| edit_title.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "edit-description", "Description" }
                            textarea {
                                id: "edit-description",
                                class: "form-input",
                                rows: 4,
                                value: edit_description(),
                                oninput: move |evt: FormEvent| edit_description.set(evt.value()),
                            }
                        }
                        div { class: "form-row",
                            div { class: "form-field",
                                label { r#for: "edit-priority", "Priority" }
                                select {
                                    id: "edit-priority",
                                    class: "form-select",
                                    value: edit_priority(),
                                    onchange: move |evt: FormEvent| edit_priority.set(evt.value()),
                                    option { value: "low", "Low" }
                                    option { value: "medium", "Medium" }
                                    option { value: "high", "High" }
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "edit-due", "Due Date" }
                                input {
                                    id: "edit-due",
                                    class: "form-input",
                                    r#type: "date",
                                    value: edit_due(),
                                    oninput: move |evt: FormEvent| edit_due.set(evt.value()),
                                }
                            }
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| editing.set(false),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: edit_title().trim().is_empty(),
                                "Save"
                            }
                        }
                    }
                } else {
                    div { class: "detail-header",
                        h1 {
                            class: if todo.status.is_done() { "detail-title done" } else { "detail-title" },
                            "{todo.title}"
                        }
                        PriorityBadge { priority: todo.priority }
                    }

                    if let Some(ref description) = todo.description {
                        p { class: "detail-description", "{description}" }
                    }

                    dl { class: "detail-meta",
                        dt { "Status" }
                        dd { "{todo.status}" }
                        if let Some(ref due) = todo.due_date {
                            dt { "Due" }
                            dd { "{ui::short_date(due)}" }
                        }
                        dt { "Created" }
                        dd { "{ui::short_date(&todo.created_at)}" }
                        dt { "Updated" }
                        dd { "{ui::short_date(&todo.updated_at)}" }
                        if let Some(ref completed) = todo.completed_at {
                            dt { "Completed" }
                            dd { "{ui::short_date(completed)}" }
                        }
                    }

                    div { class: "detail-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: handle_toggle,
                            if todo.status == TodoStatus::Done { "Mark as pending" } else { "Mark as done" }
                        }
                        button { class: "btn btn-ghost", onclick: start_edit, "Edit" }
                        button { class: "btn btn-danger", onclick: handle_delete, "Delete" }
                    }
                }
            }
        },
        Some(Err(_)) => rsx! {
            div { class: "empty-state error", "Failed to load this todo" }
        },
        None => rsx! {
            div { class: "page-loading", div { class: "spinner" } }
        },
    };

    rsx! {
        div { class: "page page-narrow",
            Link { class: "back-link", to: Route::Todos {}, "\u{2190} Back to todos" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            {detail_content}
        }
    }
}
