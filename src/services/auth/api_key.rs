//! `Authorization: ApiKey <token>` header parsing.
//!
//! Responsibility:
//! - Pull the API key out of a request's header map
//! - Classify failures as "missing" vs "malformed" so the HTTP layer can map them
//!
//! Nothing here verifies the key. Callers decide what a presented key is worth.

use std::fmt;

use axum::http::{HeaderMap, header};
use base64::Engine;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Scheme token expected as the first field of the header value.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthHeaderError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

impl AuthHeaderError {
    /// Stable machine-readable code used in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AuthHeaderError::NoAuthHeaderIncluded => "NO_AUTH_HEADER",
            AuthHeaderError::MalformedAuthHeader => "MALFORMED_AUTH_HEADER",
        }
    }
}

/// Opaque key presented by the client.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// base64url(SHA-256(key)) without padding. Safe to log.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

/// Extract the key from `Authorization: ApiKey <token>`.
///
/// Only the first `Authorization` value is consulted. Fields after the token
/// are ignored.
pub fn get_api_key(headers: &HeaderMap) -> Result<ApiKey, AuthHeaderError> {
    let value = match headers.get(header::AUTHORIZATION) {
        None => return Err(AuthHeaderError::NoAuthHeaderIncluded),
        Some(v) if v.is_empty() => return Err(AuthHeaderError::NoAuthHeaderIncluded),
        Some(v) => v
            .to_str()
            .map_err(|_| AuthHeaderError::MalformedAuthHeader)?,
    };

    let mut fields = value.split_whitespace();

    if fields.next() != Some(API_KEY_SCHEME) {
        return Err(AuthHeaderError::MalformedAuthHeader);
    }

    fields
        .next()
        .map(|token| ApiKey(token.to_owned()))
        .ok_or(AuthHeaderError::MalformedAuthHeader)
}
