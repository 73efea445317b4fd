/*
 * Responsibility
 * - Response DTO for GET /whoami
 * - Never carries the raw key, only its fingerprint
 */
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtx;
use crate::services::auth::API_KEY_SCHEME;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub scheme: &'static str,
    pub fingerprint: String,
}

impl From<&ApiKeyCtx> for WhoAmIResponse {
    fn from(ctx: &ApiKeyCtx) -> Self {
        Self {
            scheme: API_KEY_SCHEME,
            fingerprint: ctx.fingerprint(),
        }
    }
}
