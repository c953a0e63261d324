//! Axum extractors for request handling
//!
//! Custom extractors for authentication, JSON bodies, pagination and ids.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::AuthUser;
pub use pagination::Pagination;
pub use path::ItemIdPath;
pub use validated::{JsonBody, ValidatedJson};
