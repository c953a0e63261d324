//! Fixtures shared by the service unit tests

use std::sync::Arc;

use itemhub_common::JwtService;
use itemhub_core::{CredentialError, PasswordHasher, UserId};
use itemhub_db::{InMemoryItemRepository, InMemoryUserRepository};

use super::auth::AuthService;
use super::context::{ServiceContext, ServiceContextBuilder};
use crate::dto::RegisterRequest;

/// Reversible "hash" so tests skip Argon2's cost
#[derive(Debug, Default)]
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        Ok(hash.strip_prefix("plain:") == Some(password))
    }
}

pub fn jwt() -> JwtService {
    JwtService::new("service-test-secret-0123456789abcdef", 3600)
}

pub fn context() -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(Arc::new(InMemoryUserRepository::new()))
        .item_repo(Arc::new(InMemoryItemRepository::new()))
        .password_hasher(Arc::new(PlainHasher))
        .token_issuer(Arc::new(jwt()))
        .build()
        .unwrap()
}

pub fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: "correct horse".to_string(),
        name: "Ada".to_string(),
    }
}

/// Register a user and return their id
pub async fn registered_user(ctx: &ServiceContext, email: &str) -> UserId {
    AuthService::new(ctx)
        .register(register_request(email))
        .await
        .unwrap()
        .user
        .id
}
