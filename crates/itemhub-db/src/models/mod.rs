//! Database models - SQLx-compatible structs for PostgreSQL tables

mod item;
mod user;

pub use item::ItemModel;
pub use user::UserModel;
