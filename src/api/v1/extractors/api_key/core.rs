use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::ApiKeyCtx;

/// Extractor that gives a handler the ApiKeyCtx.
/// Assumes the api_key middleware already inserted it into request.extensions().
/// Missing means the route was mounted without the middleware: reject with 401.
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl FromRequestParts<AppState> for ApiKeyCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKeyCtx>()
            .cloned()
            .map(ApiKeyCtxExtractor)
            .ok_or_else(|| AppError::unauthorized("UNAUTHORIZED", "api key required"))
    }
}
