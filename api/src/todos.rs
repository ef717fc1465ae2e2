//! `/todos` endpoints: list/get/create/update/delete, the toggle intent, and
//! the aggregate stats.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::todo::{CreateTodo, Todo, TodoFilter, TodoStats, UpdateTodo};

impl ApiClient {
    /// `GET /todos` with the filter's query parameters.
    pub async fn list_todos(&self, filter: &TodoFilter) -> Result<Vec<Todo>, ApiError> {
        self.get::<Vec<Todo>>("/todos", &filter.query_pairs())
            .await?
            .into_data()
    }

    /// `GET /todos/:id`
    pub async fn get_todo(&self, id: &str) -> Result<Todo, ApiError> {
        self.get::<Todo>(&format!("/todos/{id}"), &[])
            .await?
            .into_data()
    }

    /// `POST /todos`
    pub async fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        self.post("/todos", input).await?.into_data()
    }

    /// `PUT /todos/:id`, a partial update.
    pub async fn update_todo(&self, id: &str, input: &UpdateTodo) -> Result<Todo, ApiError> {
        self.put(&format!("/todos/{id}"), input).await?.into_data()
    }

    /// `DELETE /todos/:id`
    pub async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<serde_json::Value>(&format!("/todos/{id}"))
            .await?;
        Ok(())
    }

    /// `PATCH /todos/:id/toggle`: the server flips pending↔done and returns
    /// the result; the client never computes the new status locally.
    pub async fn toggle_todo(&self, id: &str) -> Result<Todo, ApiError> {
        self.patch_empty(&format!("/todos/{id}/toggle"))
            .await?
            .into_data()
    }

    /// `GET /todos/stats`
    pub async fn todo_stats(&self) -> Result<TodoStats, ApiError> {
        self.get("/todos/stats", &[]).await?.into_data()
    }
}
