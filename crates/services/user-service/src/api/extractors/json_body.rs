//! Raw JSON body extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use common::AppError;

/// Request body kept as an untyped JSON value.
///
/// Field rules run in the service layer, so this only checks that the body
/// is JSON at all. Shape errors surface later as validation messages.
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e.body_text(), "Rejected request body");
                AppError::bad_request("Invalid request data")
            })?;

        Ok(JsonBody(value))
    }
}
