#![allow(dead_code)]

use axum::Router;
use axum::routing::{get, post};
use axum_test::{TestResponse, TestServer};
use tinyapp::state::AppState;
use tinyapp::web::handlers::{
    create_link_handler, delete_link_handler, export_handler, index_handler, login_form_handler,
    login_handler, logout_handler, new_link_form_handler, redirect_handler, register_form_handler,
    register_handler, root_handler, show_link_handler, update_link_handler,
};

pub const TEST_SECRET: &str = "test-session-secret";

pub fn test_state() -> AppState {
    AppState::new(TEST_SECRET.to_string())
}

/// Full application router over fresh, empty stores.
pub fn test_app(state: AppState) -> Router {
    Router::new()
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
}

pub fn test_server() -> TestServer {
    TestServer::new(test_app(test_state())).unwrap()
}

/// Extracts the `name=value` pair from a response's `Set-Cookie` header.
pub fn session_cookie(response: &TestResponse) -> String {
    response
        .header("set-cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Registers an account and returns its session cookie pair.
pub async fn register(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/register")
        .form(&[("email", email), ("password", password)])
        .await;
    session_cookie(&response)
}

/// Creates a link as the given session and returns the new short code.
pub async fn create_link(server: &TestServer, cookie: &str, long_url: &str) -> String {
    let response = server
        .post("/urls/new")
        .add_header("cookie", cookie)
        .form(&[("long_url", long_url)])
        .await;

    let location = response.header("location").to_str().unwrap().to_string();
    location
        .strip_prefix("/urls/")
        .expect("create should redirect to the detail page")
        .to_string()
}
