//! # itemhub-service
//!
//! Application layer: authentication and item use-cases, the service
//! context that wires them to ports, and request/response DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, CreateItemRequest, HealthChecks, HealthResponse, ItemListResponse,
    ListItemsQuery, LoginRequest, ReadinessResponse, RegisterRequest, UpdateItemRequest,
};
pub use services::{
    AuthService, ItemService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
