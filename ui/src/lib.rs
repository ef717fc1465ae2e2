//! Shared application logic for the ToDoPro frontend: session context and
//! guard, the cached todo data layer, and small presentation helpers. The
//! platform shell owns routing and the page views.

mod auth;
pub use auth::{use_api, use_session, use_session_guard, LogoutButton, SessionProvider};

mod todos;
pub use todos::{
    create_todo, delete_todo, fetch_stats, fetch_todo, fetch_todos, toggle_todo, update_todo,
    use_todo_data, TodoData,
};

mod components;
pub use components::{error_message, short_date, PriorityBadge};
