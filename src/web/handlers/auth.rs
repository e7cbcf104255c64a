//! Handlers for registration, login, and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::application::services::{LoginOutcome, RegisterOutcome};
use crate::domain::entities::NewUser;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::session::{self, Session};

/// Template for the registration form, with its failure-view variants.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
struct RegisterTemplate {
    current_user: Option<String>,
    error: Option<&'static str>,
}

/// Template for the login form, with its failure-view variants.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    current_user: Option<String>,
    error: Option<&'static str>,
}

/// Form body for registration and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Renders the registration form.
///
/// # Endpoint
///
/// `GET /register`
pub async fn register_form_handler(session: Session) -> impl IntoResponse {
    RegisterTemplate {
        current_user: session.email(),
        error: None,
    }
}

/// Creates an account and starts a session.
///
/// # Endpoint
///
/// `POST /register`
///
/// Missing fields and an already-registered email re-render the form with
/// the matching error banner, HTTP 200. On success the session cookie is set
/// and the client is redirected to the link list.
pub async fn register_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    if form.email.is_empty() || form.password.is_empty() {
        return Ok(RegisterTemplate {
            current_user: session.email(),
            error: Some("Email and password are both required."),
        }
        .into_response());
    }

    let outcome = state
        .auth_service
        .register(NewUser {
            email: form.email,
            password: form.password,
        })
        .await?;

    match outcome {
        RegisterOutcome::EmailTaken => Ok(RegisterTemplate {
            current_user: session.email(),
            error: Some("That email is already registered."),
        }
        .into_response()),
        RegisterOutcome::Created(user) => Ok((
            [(SET_COOKIE, session::set_cookie(&user.id, &state.session_secret))],
            Redirect::to("/urls"),
        )
            .into_response()),
    }
}

/// Renders the login form.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_form_handler(session: Session) -> impl IntoResponse {
    LoginTemplate {
        current_user: session.email(),
        error: None,
    }
}

/// Verifies credentials and starts a session.
///
/// # Endpoint
///
/// `POST /login`
///
/// An unknown email and a wrong password render distinct error banners, both
/// HTTP 200, and leave any existing session cookie untouched.
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    match state.auth_service.login(&form.email, &form.password).await? {
        LoginOutcome::UnknownEmail => Ok(LoginTemplate {
            current_user: session.email(),
            error: Some("No account found with that email."),
        }
        .into_response()),
        LoginOutcome::InvalidPassword => Ok(LoginTemplate {
            current_user: session.email(),
            error: Some("Invalid email or password."),
        }
        .into_response()),
        LoginOutcome::Authenticated(user) => Ok((
            [(SET_COOKIE, session::set_cookie(&user.id, &state.session_secret))],
            Redirect::to("/urls"),
        )
            .into_response()),
    }
}

/// Clears the session cookie and redirects to the (now anonymous) list.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler() -> impl IntoResponse {
    ([(SET_COOKIE, session::clear_cookie())], Redirect::to("/urls"))
}
