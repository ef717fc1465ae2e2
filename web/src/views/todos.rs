use api::{CreateTodo, Todo, TodoFilter, TodoStatus};
use dioxus::prelude::*;
use ui::{use_api, use_todo_data, PriorityBadge};

use crate::Route;

/// The main todo list: filter bar, counts, cards, and the create dialog.
#[component]
pub fn Todos() -> Element {
    let client = use_api();
    let data = use_todo_data();

    let mut status_filter = use_signal(String::new);
    let mut priority_filter = use_signal(String::new);
    let mut search = use_signal(String::new);

    let mut show_form = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut action_error = use_signal(|| Option::<String>::None);

    let resource_client = client.clone();
    let mut todos_resource = use_resource(move || {
        let client = resource_client.clone();
        let filter = TodoFilter {
            status: status_filter.read().parse().ok(),
            priority: priority_filter.read().parse().ok(),
            search: Some(search.read().clone()),
            limit: Some(50),
            ..Default::default()
        };
        async move { ui::fetch_todos(&client, data, &filter).await }
    });

    let create_client = client.clone();
    let handle_create = move |input: CreateTodo| {
        let client = create_client.clone();
        spawn(async move {
            submitting.set(true);
            form_error.set(None);
            match ui::create_todo(&client, data, &input).await {
                Ok(_) => {
                    submitting.set(false);
                    show_form.set(false);
                    todos_resource.restart();
                }
                Err(err) => {
                    submitting.set(false);
                    form_error.set(Some(ui::error_message(&err)));
                }
            }
        });
    };

    // EventHandlers so the card loop can share them
    let toggle_client = client.clone();
    let handle_toggle = EventHandler::new(move |id: String| {
        let client = toggle_client.clone();
        spawn(async move {
            match ui::toggle_todo(&client, data, &id).await {
                Ok(_) => todos_resource.restart(),
                Err(err) => action_error.set(Some(ui::error_message(&err))),
            }
        });
    });

    let delete_client = client.clone();
    let handle_delete = EventHandler::new(move |id: String| {
        let client = delete_client.clone();
        spawn(async move {
            match ui::delete_todo(&client, data, &id).await {
                Ok(()) => todos_resource.restart(),
                Err(err) => action_error.set(Some(ui::error_message(&err))),
            }
        });
    });

    let list_content = match &*todos_resource.read_unchecked() {
        Some(Ok(todos)) => {
            let pending = todos
                .iter()
                .filter(|t| t.status == TodoStatus::Pending)
                .count();
            let done = todos.len() - pending;
            rsx! {
                div { class: "stat-row",
                    div { class: "stat-card",
                        span { class: "stat-label", "Total Tasks" }
                        span { class: "stat-value", "{todos.len()}" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-label", "Pending" }
                        span { class: "stat-value stat-pending", "{pending}" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-label", "Completed" }
                        span { class: "stat-value stat-done", "{done}" }
                    }
                }

                if todos.is_empty() {
                    div { class: "empty-state",
                        h3 { "No todos found" }
                        p { "Try adjusting your filters or add your first task." }
                    }
                } else {
                    div { class: "todo-list",
                        for todo in todos.iter() {
                            TodoCard {
                                key: "{todo.id}",
                                todo: todo.clone(),
                                on_toggle: handle_toggle,
                                on_delete: handle_delete,
                            }
                        }
                    }
                }
            }
        }
        Some(Err(_)) => rsx! {
            div { class: "empty-state error", "Failed to load todos" }
        },
        None => rsx! {
            div { class: "page-loading", div { class: "spinner" } }
        },
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "All Todos" }
                    p { class: "page-subtitle", "Manage and organize your tasks" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        form_error.set(None);
                        show_form.set(true);
                    },
                    "+ Add Todo"
                }
            }

            if let Some(err) = action_error() {
                div { class: "form-error",
                    span { "{err}" }
                    button {
                        class: "dismiss",
                        onclick: move |_| action_error.set(None),
                        "\u{00d7}"
                    }
                }
            }

            // Filters
            div { class: "filter-bar",
                input {
                    class: "form-input filter-search",
                    r#type: "text",
                    placeholder: "Search todos...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                select {
                    class: "form-select",
                    onchange: move |evt: FormEvent| status_filter.set(evt.value()),
                    option { value: "", "All Status" }
                    option { value: "pending", "Pending" }
                    option { value: "done", "Done" }
                }
                select {
                    class: "form-select",
                    onchange: move |evt: FormEvent| priority_filter.set(evt.value()),
                    option { value: "", "All Priority" }
                    option { value: "high", "High" }
                    option { value: "medium", "Medium" }
                    option { value: "low", "Low" }
                }
            }

            // List
            {list_content}

            if show_form() {
                TodoForm {
                    submitting: submitting(),
                    error: form_error(),
                    on_create: handle_create,
                    on_cancel: move |_| {
                        if !submitting() {
                            show_form.set(false);
                        }
                    },
                }
            }
        }
    }
}

/// One row in the list. Toggling and deleting bubble up through callbacks so
/// the parent can refetch.
#[component]
fn TodoCard(todo: Todo, on_toggle: EventHandler<String>, on_delete: EventHandler<String>) -> Element {
    let done = todo.status.is_done();
    let toggle_id = todo.id.clone();
    let delete_id = todo.id.clone();

    rsx! {
        div { class: if done { "todo-card done" } else { "todo-card" },
            button {
                class: "todo-toggle",
                title: if done { "Mark as pending" } else { "Mark as done" },
                onclick: move |_| on_toggle.call(toggle_id.clone()),
                if done { "\u{2714}" } else { "\u{25cb}" }
            }

            div { class: "todo-body",
                Link {
                    class: "todo-title",
                    to: Route::TodoDetail { id: todo.id.clone() },
                    "{todo.title}"
                }
                if let Some(ref description) = todo.description {
                    p { class: "todo-description", "{description}" }
                }
                div { class: "todo-meta",
                    PriorityBadge { priority: todo.priority }
                    if let Some(ref due) = todo.due_date {
                        span { class: "todo-due", "due {ui::short_date(due)}" }
                    }
                    span { class: "todo-created", "{ui::short_date(&todo.created_at)}" }
                }
            }

            button {
                class: "todo-delete",
                title: "Delete",
                onclick: move |_| on_delete.call(delete_id.clone()),
                "\u{1f5d1}"
            }
        }
    }
}

/// Modal dialog collecting a new todo; the parent runs the mutation and
/// feeds `submitting`/`error` back in.
#[component]
fn TodoForm(
    submitting: bool,
    error: Option<String>,
    on_create: EventHandler<CreateTodo>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut priority = use_signal(|| "medium".to_string());
    let mut due_date = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let t = title().trim().to_string();
        if t.is_empty() {
            return;
        }
        on_create.call(CreateTodo {
            title: t,
            description: (!description().is_empty()).then(|| description()),
            priority: priority().parse().ok(),
            due_date: (!due_date().is_empty()).then(|| due_date()),
        });
    };

    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_cancel.call(()),
            div { class: "modal-body", onclick: move |evt| evt.stop_propagation(),
                h2 { class: "modal-title", "Add New Todo" }
                p { class: "modal-subtitle", "Capture a task with optional details and a due date." }

                form { onsubmit: handle_submit,
                    if let Some(ref err) = error {
                        div { class: "form-error", "{err}" }
                    }

                    div { class: "form-field",
                        label { r#for: "todo-title", "Title" }
                        input {
                            id: "todo-title",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "What needs to be done?",
                            autofocus: true,
                            value: title(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "todo-description", "Description" }
                        textarea {
                            id: "todo-description",
                            class: "form-input",
                            rows: 4,
                            placeholder: "Add more details...",
                            value: description(),
                            oninput: move |evt: FormEvent| description.set(evt.value()),
                        }
                    }

                    div { class: "form-row",
                        div { class: "form-field",
                            label { r#for: "todo-priority", "Priority" }
                            select {
                                id: "todo-priority",
                                class: "form-select",
                                value: priority(),
                                onchange: move |evt: FormEvent| priority.set(evt.value()),
                                option { value: "low", "Low" }
                                option { value: "medium", selected: true, "Medium" }
                                option { value: "high", "High" }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "todo-due-date", "Due Date" }
                            input {
                                id: "todo-due-date",
                                class: "form-input",
                                r#type: "date",
                                value: due_date(),
                                oninput: move |evt: FormEvent| due_date.set(evt.value()),
                            }
                        }
                    }

                    div { class: "modal-actions",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            disabled: submitting,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting || title().trim().is_empty(),
                            if submitting { "Saving..." } else { "Add Todo" }
                        }
                    }
                }
            }
        }
    }
}
