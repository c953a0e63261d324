//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with shape validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::{
    CreateItemRequest, ListItemsQuery, LoginRequest, RegisterRequest, UpdateItemRequest,
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use responses::{
    AuthResponse, HealthChecks, HealthResponse, ItemListResponse, ReadinessResponse,
};
