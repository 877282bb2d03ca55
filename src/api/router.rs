use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{auth, cards, diagnostics, users, wrongs};
use crate::api::middleware::{
    auth::require_auth, logging::log_errors, panic::panic_response, rate_limit::rate_limit,
    security_headers::with_security_headers,
};
use crate::state::AppState;

/// Largest JSON body accepted
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Builds the full application
///
/// Pipeline, outermost first: security headers, request tracing, CORS
/// (answers preflights), rate limiting, body limit, error logging, panic
/// recovery, then the public auth routes or the authentication gate in front
/// of the resource routes and the unknown-route fallback.
pub fn router(state: AppState) -> Router {
    let mut public = Router::new()
        .route(
            "/signin",
            post(auth::sign_in).fallback(wrongs::method_not_allowed),
        )
        .route(
            "/signup",
            post(auth::sign_up).fallback(wrongs::method_not_allowed),
        );

    if state.crash_test_enabled {
        tracing::warn!("crash-test route enabled");
        public = public.route(
            "/crash-test",
            get(diagnostics::crash_test).fallback(wrongs::method_not_allowed),
        );
    }

    let protected = Router::new()
        .route("/users", get(users::list_users).fallback(wrongs::not_found))
        .route(
            "/users/me",
            get(users::get_current_user)
                .patch(users::update_profile)
                .fallback(wrongs::not_found),
        )
        .route(
            "/users/me/avatar",
            patch(users::update_avatar).fallback(wrongs::not_found),
        )
        .route(
            "/users/:user_id",
            get(users::get_user).fallback(wrongs::not_found),
        )
        .route(
            "/cards",
            get(cards::list_cards)
                .post(cards::create_card)
                .fallback(wrongs::not_found),
        )
        .route(
            "/cards/:card_id",
            axum::routing::delete(cards::delete_card).fallback(wrongs::not_found),
        )
        .route(
            "/cards/:card_id/likes",
            put(cards::like_card)
                .delete(cards::unlike_card)
                .fallback(wrongs::not_found),
        )
        .fallback(wrongs::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = public
        .merge(protected)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(log_errors))
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT))
        .layer(middleware::from_fn_with_state(
            state.rate_limiter.clone(),
            rate_limit,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    with_security_headers(app)
}
