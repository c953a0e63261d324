//! Item entity - a private resource owned by exactly one user
//!
//! Items follow a two-state activation machine:
//!
//! ```text
//!   create ──► Inactive ──activate──► Active
//!                 ▲                     │
//!                 └─────deactivate──────┘
//! ```
//!
//! Repeating a transition is an error rather than a no-op. Every mutating
//! method returns a new `Item`; the receiver is left untouched.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::value_objects::{ItemId, UserId};

/// Maximum item name length, in characters, after trimming
pub const ITEM_NAME_MAX_LEN: usize = 200;

/// Maximum item description length, in characters, after trimming
pub const ITEM_DESCRIPTION_MAX_LEN: usize = 1000;

/// Activation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    #[default]
    Inactive,
}

impl ItemStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when reading an unknown status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown item status: {0}")]
pub struct ItemStatusParseError(pub String);

impl FromStr for ItemStatus {
    type Err = ItemStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ItemStatusParseError(other.to_string())),
        }
    }
}

/// Raw fields of an item as stored
#[derive(Debug, Clone)]
pub struct ItemProps {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owned item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    status: ItemStatus,
    user_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Public projection of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Validate and build a new inactive item for `user_id`
    pub fn create(name: &str, description: &str, user_id: UserId) -> AppResult<Self> {
        let name = validate_name(name)?;
        let description = validate_description(description)?;
        let now = now();

        Ok(Self {
            id: ItemId::new(),
            name,
            description,
            status: ItemStatus::Inactive,
            user_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild an item from storage without re-validating
    pub fn from_persistence(props: ItemProps) -> Self {
        Self {
            id: props.id,
            name: props.name,
            description: props.description,
            status: props.status,
            user_id: props.user_id,
            created_at: props.created_at,
            updated_at: props.updated_at,
        }
    }

    /// Inactive → Active
    pub fn activate(&self) -> AppResult<Self> {
        if self.status.is_active() {
            return Err(AppError::validation("Item is already active"));
        }
        Ok(self.with_status(ItemStatus::Active))
    }

    /// Active → Inactive
    pub fn deactivate(&self) -> AppResult<Self> {
        if !self.status.is_active() {
            return Err(AppError::validation("Item is already inactive"));
        }
        Ok(self.with_status(ItemStatus::Inactive))
    }

    /// Replace the supplied fields, keeping the others
    ///
    /// Status is never touched. `updated_at` advances even when the new
    /// values equal the old ones.
    pub fn update_details(&self, name: Option<&str>, description: Option<&str>) -> AppResult<Self> {
        let name = match name {
            Some(name) => validate_name(name)?,
            None => self.name.clone(),
        };
        let description = match description {
            Some(description) => validate_description(description)?,
            None => self.description.clone(),
        };

        Ok(Self {
            name,
            description,
            updated_at: advance(self.updated_at),
            ..self.clone()
        })
    }

    pub fn to_response(&self) -> ItemResponse {
        ItemResponse {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn with_status(&self, status: ItemStatus) -> Self {
        Self {
            status,
            updated_at: advance(self.updated_at),
            ..self.clone()
        }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn status(&self) -> ItemStatus {
        self.status
    }

    /// Owner of the item
    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn validate_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    let len = name.chars().count();
    if len == 0 || len > ITEM_NAME_MAX_LEN {
        return Err(AppError::validation(format!(
            "Item name must be between 1 and {ITEM_NAME_MAX_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

fn validate_description(description: &str) -> AppResult<String> {
    let description = description.trim();
    if description.chars().count() > ITEM_DESCRIPTION_MAX_LEN {
        return Err(AppError::validation(format!(
            "Item description must be at most {ITEM_DESCRIPTION_MAX_LEN} characters"
        )));
    }
    Ok(description.to_string())
}

// Microsecond precision matches what PostgreSQL stores.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Next `updated_at`, strictly after `previous` even if the clock has not moved
fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    now().max(previous + Duration::microseconds(1))
}
