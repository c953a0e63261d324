//! User entity - a registered account that owns items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AppError, AppResult};
use crate::value_objects::UserId;

/// Input for a fresh registration
///
/// The id, hash and timestamp are computed by the caller before validation.
#[derive(Clone)]
pub struct NewUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Raw fields of a user as stored
#[derive(Clone)]
pub struct UserProps {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registered user
///
/// Immutable once built: there are no setters.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Public projection of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub name: String,
}

impl User {
    /// Validate and build a user for a new registration
    pub fn create(input: NewUser) -> AppResult<Self> {
        if !input.email.contains('@') {
            return Err(AppError::validation("Invalid email address"));
        }

        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }

        Ok(Self {
            id: input.id,
            email: input.email,
            name: name.to_string(),
            password_hash: input.password_hash,
            created_at: input.created_at,
        })
    }

    /// Rebuild a user from storage without re-validating
    pub fn from_persistence(props: UserProps) -> Self {
        Self {
            id: props.id,
            email: props.email,
            name: props.name,
            password_hash: props.password_hash,
            created_at: props.created_at,
        }
    }

    /// The only sanctioned external view; the password hash stays behind
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }

    #[inline]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
