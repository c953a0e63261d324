//! Business logic services
//!
//! Services orchestrate entities and ports. Validation lives in the
//! entities; services only sequence calls and translate port failures.

pub mod auth;
pub mod context;
pub mod error;
pub mod item;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use item::ItemService;
