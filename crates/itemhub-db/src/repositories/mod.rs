//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in itemhub-core.

mod error;
mod item;
mod user;

pub use item::PgItemRepository;
pub use user::PgUserRepository;
