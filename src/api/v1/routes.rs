/*
 * Responsibility
 * - v1 URL layout
 * - Decide which routes sit behind the api key middleware
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, whoami::whoami};
use crate::middleware;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected = middleware::auth::api_key::apply(Router::new().route("/whoami", get(whoami)));

    public.merge(protected)
}
