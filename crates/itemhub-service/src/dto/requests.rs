//! Request DTOs for API endpoints
//!
//! Validation here is about request shape only. Domain rules (email format,
//! trimmed name lengths) are enforced by the entities.

use serde::Deserialize;
use validator::Validate;

/// Page used when the query omits `page`
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the query omits `limit`
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Largest accepted `limit`
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 254, message = "Email must be 1-254 characters"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Item Requests
// ============================================================================

/// Create item request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial item update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `?page=&limit=` for listing items
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListItemsQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,

    #[validate(range(
        min = 1,
        max = MAX_PAGE_SIZE,
        message = "limit must be between 1 and 100"
    ))]
    pub limit: Option<u32>,
}

impl ListItemsQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
