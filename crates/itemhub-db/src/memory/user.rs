//! In-memory implementation of UserRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use itemhub_core::entities::User;
use itemhub_core::error::RepositoryError;
use itemhub_core::traits::{RepoResult, UserRepository};
use itemhub_core::value_objects::UserId;

/// Users keyed by id; email uniqueness is checked under the write lock
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.users.read();
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.write();

        if users.values().any(|u| u.email() == user.email()) {
            return Err(RepositoryError::UniqueViolation("users_email_key".to_string()));
        }

        users.insert(user.id(), user.clone());
        tracing::debug!(user_id = %user.id(), "Stored user");
        Ok(())
    }
}
