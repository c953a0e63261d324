//! Pagination extractor
//!
//! Extracts page-number pagination parameters from the query string.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use itemhub_service::ListItemsQuery;
use validator::Validate;

use crate::response::ApiError;

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,
    /// Page size, 1 to 100
    pub limit: u32,
}

impl TryFrom<ListItemsQuery> for Pagination {
    type Error = ApiError;

    fn try_from(query: ListItemsQuery) -> Result<Self, Self::Error> {
        query.validate()?;

        Ok(Self {
            page: query.page(),
            limit: query.limit(),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListItemsQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Pagination::try_from(query)
    }
}
