//! Ports implemented by the infrastructure crates

mod credentials;
mod repositories;

pub use credentials::{PasswordHasher, TokenIssuer, TokenSubject};
pub use repositories::{ItemPage, ItemRepository, RepoResult, UserRepository};
