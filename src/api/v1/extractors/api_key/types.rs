/*
 * Responsibility
 * - The "presented key" context visible to handlers
 * - middleware builds it and stores it in request extensions
 */

use crate::services::auth::ApiKey;

/// Context attached to requests that passed the API key middleware.
///
/// `key` is the raw token; hand it to whatever authenticates it, never to logs.
#[derive(Debug, Clone)]
pub struct ApiKeyCtx {
    pub key: ApiKey,
}

impl ApiKeyCtx {
    pub fn new(key: ApiKey) -> Self {
        Self { key }
    }

    /// base64url(SHA-256(key)); what logs and responses show instead of the key.
    pub fn fingerprint(&self) -> String {
        self.key.fingerprint()
    }
}
