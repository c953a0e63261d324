//! # itemhub-db
//!
//! Storage layer implementing the repository traits from `itemhub-core`.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repositories (`PgUserRepository`, `PgItemRepository`)
//! - In-memory repositories for tests and `STORAGE_BACKEND=memory`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use itemhub_common::DatabaseConfig;
//! use itemhub_db::{create_pool, run_migrations, PgUserRepository};
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryItemRepository, InMemoryUserRepository};
pub use pool::{create_pool, ping, run_migrations, PgPool, MIGRATOR};
pub use repositories::{PgItemRepository, PgUserRepository};
