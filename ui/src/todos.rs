//! Client-side cache and data operations for the todo collection.
//!
//! Reads consult the cache first and record what they fetch; every
//! successful mutation marks the whole collection family stale so the next
//! read goes back to the server. A failed mutation leaves every cache entry
//! untouched and hands the error to the caller; retrying is the user's
//! decision.

use api::{ApiClient, ApiError, CreateTodo, Todo, TodoFilter, TodoStats, UpdateTodo};
use dioxus::prelude::*;
use store::QueryCache;

const STATS_KEY: &str = "todos/stats";

/// Cached todo query results, keyed by canonical query identity.
///
/// Provided as `Signal<TodoData>` by the guarded app layout; one instance
/// spans all guarded views so list, detail, and analytics stay consistent.
#[derive(Clone, Default)]
pub struct TodoData {
    lists: QueryCache<Vec<Todo>>,
    items: QueryCache<Todo>,
    stats: QueryCache<TodoStats>,
}

impl TodoData {
    /// Mark every collection-level entry stale. Runs after any successful
    /// mutation.
    fn invalidate_collections(&mut self) {
        self.lists.invalidate_all();
        self.stats.invalidate(STATS_KEY);
    }
}

/// Consume the todo cache signal from context.
pub fn use_todo_data() -> Signal<TodoData> {
    use_context()
}

/// Fetch the collection for `filter`, served from cache while fresh.
pub async fn fetch_todos(
    client: &ApiClient,
    mut data: Signal<TodoData>,
    filter: &TodoFilter,
) -> Result<Vec<Todo>, ApiError> {
    let key = filter.cache_key();
    if let Some(todos) = data.read().lists.get(&key) {
        return Ok(todos.clone());
    }

    let todos = client.list_todos(filter).await?;
    data.write().lists.insert(key, todos.clone());
    Ok(todos)
}

/// Fetch a single todo by id, served from cache while fresh.
pub async fn fetch_todo(
    client: &ApiClient,
    mut data: Signal<TodoData>,
    id: &str,
) -> Result<Todo, ApiError> {
    if let Some(todo) = data.read().items.get(id) {
        return Ok(todo.clone());
    }

    let todo = client.get_todo(id).await?;
    data.write().items.insert(id, todo.clone());
    Ok(todo)
}

/// Fetch the aggregate stats, served from cache while fresh.
pub async fn fetch_stats(
    client: &ApiClient,
    mut data: Signal<TodoData>,
) -> Result<TodoStats, ApiError> {
    if let Some(stats) = data.read().stats.get(STATS_KEY) {
        return Ok(*stats);
    }

    let stats = client.todo_stats().await?;
    data.write().stats.insert(STATS_KEY, stats);
    Ok(stats)
}

/// Create a todo and invalidate the collection family.
pub async fn create_todo(
    client: &ApiClient,
    mut data: Signal<TodoData>,
    input: &CreateTodo,
) -> Result<Todo, ApiError> {
    let todo = client.create_todo(input).await?;
    data.write().invalidate_collections();
    Ok(todo)
}

/// Apply a partial update and invalidate the collection family plus the
/// item's own entry.
pub async fn update_todo(
    client: &ApiClient,
    mut data: Signal<TodoData>,
    id: &str,
    input: &UpdateTodo,
) -> Result<Todo, ApiError> {
    let todo = client.update_todo(id, input).await?;
    let mut data = data.write();
    data.invalidate_collections();
    data.items.invalidate(id);
    Ok(todo)
}

/// Delete a todo; its item entry is dropped, the collections go stale.
pub async fn delete_todo(
    client: &ApiClient,
    mut data: Signal<TodoData>,
    id: &str,
) -> Result<(), ApiError> {
    client.delete_todo(id).await?;
    let mut data = data.write();
    data.invalidate_collections();
    data.items.remove(id);
    Ok(())
}

/// Flip a todo between pending and done. The server computes the new state;
/// the caches are invalidated so reads pick up whatever it decided.
pub async fn toggle_todo(
    client: &ApiClient,
    mut data: Signal<TodoData>,
    id: &str,
) -> Result<Todo, ApiError> {
    let todo = client.toggle_todo(id).await?;
    let mut data = data.write();
    data.invalidate_collections();
    data.items.invalidate(id);
    Ok(todo)
}
