pub mod api_key;

pub use api_key::{API_KEY_SCHEME, ApiKey, AuthHeaderError, get_api_key};
