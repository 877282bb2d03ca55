use std::sync::Arc;

use crate::api::middleware::rate_limit::RateLimiter;
use crate::config::{AuthConfig, Config};
use crate::domain::repositories::{CardRepository, UserRepository};

/// Shared application context, built once at startup and handed to the router.
///
/// Cloned per request; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub cards: Arc<dyn CardRepository>,
    pub auth: Arc<AuthConfig>,
    pub rate_limiter: Arc<RateLimiter>,
    /// Mount the `/crash-test` diagnostic route
    pub crash_test_enabled: bool,
}

impl AppState {
    pub fn new(
        config: &Config,
        users: Arc<dyn UserRepository>,
        cards: Arc<dyn CardRepository>,
    ) -> Self {
        Self {
            users,
            cards,
            auth: Arc::new(config.auth.clone()),
            rate_limiter: Arc::new(RateLimiter::new(
                config.rate_limit.max_requests,
                config.rate_limit.window,
            )),
            crash_test_enabled: config.crash_test_enabled,
        }
    }
}
