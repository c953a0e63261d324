//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, items};
use crate::state::AppState;

/// Prefix shared by every endpoint
pub const API_PREFIX: &str = "/api/v1";

/// Create the main API router (health excluded so it can skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest(API_PREFIX, api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().nest(
        API_PREFIX,
        Router::new()
            .route("/health", get(health::health_check))
            .route("/health/ready", get(health::readiness_check)),
    )
}

fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(item_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
}

/// Item routes, all scoped to the token holder
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(items::create_item).get(items::list_items))
        .route(
            "/items/:item_id",
            get(items::get_item)
                .patch(items::update_item)
                .delete(items::delete_item),
        )
        .route("/items/:item_id/activate", post(items::activate_item))
        .route("/items/:item_id/deactivate", post(items::deactivate_item))
}
