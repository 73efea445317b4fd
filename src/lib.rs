//! API key header extraction for axum services.
//!
//! The core is [`services::auth::get_api_key`]: it turns a request's
//! `Authorization: ApiKey <token>` header into an [`services::auth::ApiKey`]
//! or a typed [`services::auth::AuthHeaderError`]. The rest of the crate is a
//! small axum service wired around it.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
