//! Query string filters for list endpoints

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::response::ApiError;

/// Optional `?status=` filter. Status names parse case-insensitively.
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct StatusFilter<T> {
    pub status: Option<T>,
}

/// Optional `?role=` filter
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct RoleFilter<T> {
    pub role: Option<T>,
}

/// Optional `?limit=` for endpoints that are not paged
#[derive(Debug, Deserialize)]
pub struct LimitFilter {
    #[serde(default)]
    pub limit: Option<i64>,
}

/// `Query` with rejections mapped to [`ApiError::InvalidQuery`]
#[derive(Debug)]
pub struct QueryFilter<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryFilter<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(QueryFilter(value))
    }
}
