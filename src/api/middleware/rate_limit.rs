//! Fixed-window rate limiting per client address.
//!
//! Every response carries `RateLimit-Limit`, `RateLimit-Remaining` and
//! `RateLimit-Reset`; refused requests also get `Retry-After` and are
//! answered through [`ApiError`].

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::RETRY_AFTER, HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;

use crate::api::errors::ApiError;

const RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("ratelimit-limit");
const RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("ratelimit-remaining");
const RATELIMIT_RESET: HeaderName = HeaderName::from_static("ratelimit-reset");

/// Window table size above which expired entries are swept
const PRUNE_THRESHOLD: usize = 10_000;

/// Key used when the peer address is unknown (e.g. in-process tests)
const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    hits: u32,
}

/// Outcome of counting one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Time until the client's window restarts
    pub reset_after: Duration,
}

impl RateLimitStatus {
    fn reset_secs(&self) -> u64 {
        self.reset_after.as_secs() + u64::from(self.reset_after.subsec_nanos() > 0)
    }

    fn apply_headers(&self, headers: &mut HeaderMap) {
        headers.insert(RATELIMIT_LIMIT, HeaderValue::from(self.limit));
        headers.insert(RATELIMIT_REMAINING, HeaderValue::from(self.remaining));
        headers.insert(RATELIMIT_RESET, HeaderValue::from(self.reset_secs()));
        if !self.allowed {
            headers.insert(RETRY_AFTER, HeaderValue::from(self.reset_secs()));
        }
    }
}

/// Counts requests per client in fixed windows
///
/// One table entry per client key; the lock serialises updates for all keys.
#[derive(Debug)]
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Records one request from `client` at `now` and reports whether it may proceed
    pub async fn check(&self, client: &str, now: Instant) -> RateLimitStatus {
        let mut windows = self.windows.lock().await;

        if windows.len() >= PRUNE_THRESHOLD {
            let window = self.window;
            windows.retain(|_, w| now.saturating_duration_since(w.started_at) < window);
        }

        let entry = windows.entry(client.to_string()).or_insert(Window {
            started_at: now,
            hits: 0,
        });
        if now.saturating_duration_since(entry.started_at) >= self.window {
            *entry = Window {
                started_at: now,
                hits: 0,
            };
        }
        entry.hits = entry.hits.saturating_add(1);

        RateLimitStatus {
            allowed: entry.hits <= self.limit,
            limit: self.limit,
            remaining: self.limit.saturating_sub(entry.hits),
            reset_after: self
                .window
                .saturating_sub(now.saturating_duration_since(entry.started_at)),
        }
    }

    #[cfg(test)]
    async fn tracked_clients(&self) -> usize {
        self.windows.lock().await.len()
    }
}

/// Middleware enforcing the limiter in front of every route
pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request);
    let status = limiter.check(&client, Instant::now()).await;

    let mut response = if status.allowed {
        next.run(request).await
    } else {
        tracing::warn!(client = %client, "rate limit exceeded");
        ApiError::too_many_requests("Too many requests, please try again later.").into_response()
    };

    status.apply_headers(response.headers_mut());
    response
}

fn client_key(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
