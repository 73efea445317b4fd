/*
 * Responsibility
 * - Request extractors used by v1 handlers
 */
pub mod api_key;

pub use api_key::{ApiKeyCtx, ApiKeyCtxExtractor};
