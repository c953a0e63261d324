//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every item operation is scoped by owner: an
//! item that exists under another user is indistinguishable from one that
//! does not exist.

use async_trait::async_trait;

use crate::entities::{Item, User};
use crate::error::RepositoryError;
use crate::value_objects::{ItemId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepositoryError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email (exact match)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Persist a new user
    ///
    /// Fails with `RepositoryError::UniqueViolation` if the email is taken.
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Item Repository
// ============================================================================

/// One page of a user's items plus the total across all pages
#[derive(Debug, Clone, Default)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub total: u64,
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find an item by ID, only if owned by `user_id`
    async fn find_by_id(&self, id: ItemId, user_id: UserId) -> RepoResult<Option<Item>>;

    /// List a user's items, newest first
    ///
    /// `page` is 1-based. A page past the end yields no items but the real
    /// total.
    async fn find_all_by_user(
        &self,
        user_id: UserId,
        page: u32,
        limit: u32,
    ) -> RepoResult<ItemPage>;

    /// Persist a new item
    async fn create(&self, item: &Item) -> RepoResult<()>;

    /// Overwrite name, description, status and `updated_at`
    ///
    /// Returns `false` if no item with that id exists for its owner.
    async fn update(&self, item: &Item) -> RepoResult<bool>;

    /// Remove an item; returns `false` if nothing matched
    async fn delete(&self, id: ItemId, user_id: UserId) -> RepoResult<bool>;
}
