//! `Authorization: ApiKey <token>` check → ApiKeyCtx into extensions
//!
//! The key is only extracted, never verified. Anything that needs to decide
//! whether a key is good belongs behind ApiKeyCtx in the handler/service.

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// Require an API key on every route of `router`.
///
/// Uses `route_layer`, so unmatched paths still fall through to a 404.
///
/// ```ignore
/// let protected = middleware::auth::api_key::apply(Router::new().route("/whoami", get(whoami)));
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(
                error = %err,
                code = err.code(),
                path = %req.uri().path(),
                "api key rejected"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(key);
    tracing::debug!(fingerprint = %ctx.fingerprint(), "api key accepted");

    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
