/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Must be cheap to Clone (Arc inside)
 */
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
