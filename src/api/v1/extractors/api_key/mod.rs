/*!
 * API key context extractor
 *
 * Responsibility:
 * - Hand the key accepted by the middleware (ApiKeyCtx) to handlers
 * - axum glue lives in core, the context type lives in types
 */

mod core;
mod types;

pub use core::ApiKeyCtxExtractor;
pub use types::ApiKeyCtx;
