//! Service context - dependency container for services
//!
//! Holds the repositories and credential collaborators the use-cases need.
//! Wiring is manual: the binary (or a test) builds one `ServiceContext` and
//! shares it behind an `Arc`.

use std::sync::Arc;

use itemhub_core::traits::{ItemRepository, PasswordHasher, TokenIssuer, UserRepository};
use itemhub_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Present only for the PostgreSQL backend
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    item_repo: Arc<dyn ItemRepository>,

    // Credentials
    password_hasher: Arc<dyn PasswordHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl ServiceContext {
    pub fn new(
        pool: Option<PgPool>,
        user_repo: Arc<dyn UserRepository>,
        item_repo: Arc<dyn ItemRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            item_repo,
            password_hasher,
            token_issuer,
        }
    }

    /// Get the PostgreSQL connection pool, if storage is backed by one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn item_repo(&self) -> &dyn ItemRepository {
        self.item_repo.as_ref()
    }

    pub fn password_hasher(&self) -> &dyn PasswordHasher {
        self.password_hasher.as_ref()
    }

    pub fn token_issuer(&self) -> &dyn TokenIssuer {
        self.token_issuer.as_ref()
    }

    /// Whether the storage backend is reachable
    ///
    /// In-memory storage is always ready.
    pub async fn storage_ready(&self) -> bool {
        match &self.pool {
            Some(pool) => match itemhub_db::ping(pool).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "Storage readiness check failed");
                    false
                }
            },
            None => true,
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    item_repo: Option<Arc<dyn ItemRepository>>,
    password_hasher: Option<Arc<dyn PasswordHasher>>,
    token_issuer: Option<Arc<dyn TokenIssuer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn item_repo(mut self, repo: Arc<dyn ItemRepository>) -> Self {
        self.item_repo = Some(repo);
        self
    }

    pub fn password_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.password_hasher = Some(hasher);
        self
    }

    pub fn token_issuer(mut self, issuer: Arc<dyn TokenIssuer>) -> Self {
        self.token_issuer = Some(issuer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Infrastructure` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.item_repo.ok_or_else(|| missing("item_repo"))?,
            self.password_hasher.ok_or_else(|| missing("password_hasher"))?,
            self.token_issuer.ok_or_else(|| missing("token_issuer"))?,
        ))
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::infrastructure(anyhow::anyhow!("{dependency} is required"))
}
