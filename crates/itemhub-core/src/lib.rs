//! # itemhub-core
//!
//! Domain layer containing the error kernel, entities, value objects, and ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Item, ItemProps, ItemResponse, ItemStatus, NewUser, User, UserProps, UserResponse,
};
pub use error::{AppError, AppResult, CredentialError, ErrorCode, RepositoryError};
pub use traits::{
    ItemPage, ItemRepository, PasswordHasher, RepoResult, TokenIssuer, TokenSubject,
    UserRepository,
};
pub use value_objects::{IdParseError, ItemId, UserId};
