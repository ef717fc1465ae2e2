pub mod cache;
pub mod models;
pub mod session;

mod storage;
pub use storage::{MemoryStorage, SessionStorage};

mod file_storage;
pub use file_storage::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::LocalStorage;

pub use cache::QueryCache;
pub use models::User;
pub use session::{GuardDecision, PersistedSession, Session, SessionStore};
