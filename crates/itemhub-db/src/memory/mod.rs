//! In-memory repositories
//!
//! Process-local storage with the same ownership rules as the PostgreSQL
//! adapter. Used by `STORAGE_BACKEND=memory` and by tests.

mod item;
mod user;

pub use item::InMemoryItemRepository;
pub use user::InMemoryUserRepository;
