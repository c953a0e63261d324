//! Model → entity mappers
//!
//! Rows are trusted: entities are rebuilt with `from_persistence` and are
//! not re-validated.

mod item;
mod user;
