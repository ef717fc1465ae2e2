//! # API crate: HTTP client for the ToDoPro backend
//!
//! Everything the frontend knows about the remote API lives here: the
//! request/response plumbing, the normalized error type, and typed methods
//! for the auth and todos resources. The session itself is carried in an
//! HTTP-only cookie, so no tokens pass through this crate; requests just
//! opt into credentials.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`](ApiClient) | `reqwest` wrapper, JSON response envelope, outcome normalization |
//! | [`error`](ApiError) | Failure taxonomy: transport, HTTP (with field errors), decode |
//! | [`auth`] | `/auth/*` endpoints and the session-revalidation helper |
//! | [`todos`] | `/todos` CRUD, toggle, and stats |
//! | [`models`] | Wire types (`Todo`, filters, stats); re-exports the shared `User` |

mod client;
mod config;
mod error;

pub mod auth;
pub mod models;
pub mod todos;

pub use auth::{apply_me_outcome, ProfileUpdate};
pub use client::{ApiClient, ApiResponse};
pub use config::ApiConfig;
pub use error::{ApiError, FieldError};
pub use models::todo::{
    CreateTodo, Priority, SortOrder, Todo, TodoFilter, TodoStats, TodoStatus, UpdateTodo,
};
pub use store::User;
