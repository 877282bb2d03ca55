// Request pipeline stages shared by all routes

pub mod auth;
pub mod logging;
pub mod panic;
pub mod rate_limit;
pub mod security_headers;
