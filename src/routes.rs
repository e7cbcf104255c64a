//! Router configuration for the whole HTTP surface.
//!
//! # Route Structure
//!
//! - `GET  /`                   - redirect to the link list
//! - `GET  /u/{code}`           - short link redirect (public)
//! - `GET  /urls`               - current user's links
//! - `GET  /urls.json`          - JSON dump of the link table (public)
//! - `GET|POST /urls/new`       - creation form / create
//! - `GET|POST /urls/{code}`    - detail / update
//! - `POST /urls/{code}/delete` - delete
//! - `GET|POST /register`       - registration
//! - `GET|POST /login`          - login
//! - `POST /logout`             - logout
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling
//!
//! Authentication is not a route layer here: the [`crate::web::session`]
//! extractor derives the session per request, and each handler applies its
//! own authorization rule.

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;
use crate::web::handlers::{
    create_link_handler, delete_link_handler, export_handler, index_handler, login_form_handler,
    login_handler, logout_handler, new_link_form_handler, redirect_handler, register_form_handler,
    register_handler, root_handler, show_link_handler, update_link_handler,
};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/u/{code}", get(redirect_handler))
        .route("/urls", get(index_handler))
        .route("/urls.json", get(export_handler))
        .route(
            "/urls/new",
            get(new_link_form_handler).post(create_link_handler),
        )
        .route(
            "/urls/{code}",
            get(show_link_handler).post(update_link_handler),
        )
        .route("/urls/{code}/delete", post(delete_link_handler))
        .route(
            "/register",
            get(register_form_handler).post(register_handler),
        )
        .route("/login", get(login_form_handler).post(login_handler))
        .route("/logout", post(logout_handler))
        .with_state(state)
        .layer(trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Tracing middleware: INFO-level request spans with latency on response.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
