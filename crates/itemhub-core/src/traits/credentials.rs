//! Credential ports - password hashing and access tokens

use crate::error::CredentialError;
use crate::value_objects::UserId;

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// `Ok(false)` for a wrong password; `Err` only if `hash` is unreadable
    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError>;
}

/// Identity carried inside an access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub email: String,
}

/// Issues and checks signed, expiring access tokens
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &TokenSubject) -> Result<String, CredentialError>;

    fn verify(&self, token: &str) -> Result<TokenSubject, CredentialError>;
}
