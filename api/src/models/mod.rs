//! Wire types for the API surface.

pub mod todo;

pub use store::User;
