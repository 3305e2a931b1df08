//! List filter extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use common::AppError;
use domain::UserFilter;

/// Query string parsed into a `UserFilter`.
///
/// Numeric parameters that do not parse as integers reject the request;
/// empty ones count as absent.
pub struct ListQuery(pub UserFilter);

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(filter) = Query::<UserFilter>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::bad_request(format!("Invalid query parameters: {}", e.body_text()))
            })?;

        Ok(ListQuery(filter))
    }
}
