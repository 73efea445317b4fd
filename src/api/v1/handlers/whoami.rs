/*
 * Responsibility
 * - GET /whoami: report which key the caller presented (by fingerprint)
 */
use axum::Json;

use crate::api::v1::dto::whoami::WhoAmIResponse;
use crate::api::v1::extractors::ApiKeyCtxExtractor;

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse::from(&ctx))
}
