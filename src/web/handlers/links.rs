//! Handlers for the short URL CRUD pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::session::Session;

/// Template for the link list page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {
    current_user: Option<String>,
    links: Vec<Link>,
}

/// Template for the link creation form.
#[derive(Template, WebTemplate)]
#[template(path = "new.html")]
struct NewLinkTemplate {
    current_user: Option<String>,
    error: Option<&'static str>,
}

/// Template for the link detail page with owner-only edit controls.
#[derive(Template, WebTemplate)]
#[template(path = "show.html")]
struct ShowLinkTemplate {
    current_user: Option<String>,
    code: String,
    long_url: String,
    is_owner: bool,
}

/// Template for an unknown short code on the detail page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct LinkNotFoundTemplate {
    current_user: Option<String>,
    code: String,
}

/// Form body for creating or updating a link.
#[derive(Debug, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub long_url: String,
}

/// Redirects the root path to the link list.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Redirect {
    Redirect::to("/urls")
}

/// Renders the current user's links.
///
/// # Endpoint
///
/// `GET /urls`
///
/// Anonymous visitors see an empty list with a login prompt; the original
/// behavior for this case was ambiguous, and "no links" is the recorded
/// choice.
pub async fn index_handler(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let links = match session.user_id() {
        Some(user_id) => state.link_service.list_links_for(user_id).await?,
        None => Vec::new(),
    };

    Ok(IndexTemplate {
        current_user: session.email(),
        links,
    })
}

/// Renders the link creation form.
///
/// # Endpoint
///
/// `GET /urls/new`
///
/// Anonymous visitors are sent to the login page rather than shown a form
/// they cannot submit.
pub async fn new_link_form_handler(session: Session) -> Response {
    if session.user.is_none() {
        return Redirect::to("/login").into_response();
    }

    NewLinkTemplate {
        current_user: session.email(),
        error: None,
    }
    .into_response()
}

/// Creates a short link and redirects to its detail page.
///
/// # Endpoint
///
/// `POST /urls/new`
///
/// # Errors
///
/// Returns 403 when anonymous. A missing long URL is not an error: the form
/// is re-rendered with a message, HTTP 200.
pub async fn create_link_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LinkForm>,
) -> Result<Response, AppError> {
    let user = session.require_user("Please register or log in before adding a new URL")?;

    let long_url = form.long_url.trim();
    if long_url.is_empty() {
        return Ok(NewLinkTemplate {
            current_user: session.email(),
            error: Some("Enter a URL to shorten."),
        }
        .into_response());
    }

    let link = state
        .link_service
        .create_link(NewLink {
            long_url: long_url.to_string(),
            owner_id: user.id.clone(),
        })
        .await?;

    Ok(Redirect::to(&format!("/urls/{}", link.code)).into_response())
}

/// Renders the detail page for a short code.
///
/// # Endpoint
///
/// `GET /urls/{code}`
///
/// An unknown code renders the dedicated not-found view with HTTP 200; this
/// is a navigation dead end, not a protocol error.
pub async fn show_link_handler(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    match state.link_service.get_link(&code).await? {
        Some(link) => {
            let is_owner = session.user_id() == Some(link.owner_id.as_str());
            Ok(ShowLinkTemplate {
                current_user: session.email(),
                code: link.code,
                long_url: link.long_url,
                is_owner,
            }
            .into_response())
        }
        None => Ok(LinkNotFoundTemplate {
            current_user: session.email(),
            code,
        }
        .into_response()),
    }
}

/// Replaces the long URL of an owned link and re-renders the detail page.
///
/// # Endpoint
///
/// `POST /urls/{code}`
///
/// # Errors
///
/// Returns 403 when anonymous or not the owner, 404 for an unknown code.
pub async fn update_link_handler(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
    Form(form): Form<LinkForm>,
) -> Result<Response, AppError> {
    let user = session.require_user("You are not the owner of this short URL")?;

    let link = state
        .link_service
        .update_long_url(&code, &form.long_url, &user.id)
        .await?;

    Ok(ShowLinkTemplate {
        current_user: session.email(),
        code: link.code,
        long_url: link.long_url,
        is_owner: true,
    }
    .into_response())
}

/// Deletes an owned link and redirects to the list.
///
/// # Endpoint
///
/// `POST /urls/{code}/delete`
///
/// # Errors
///
/// Returns 403 when anonymous or not the owner, 404 for an unknown code.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    let user = session.require_user("You do not own this short URL")?;

    state.link_service.delete_link(&code, &user.id).await?;

    Ok(Redirect::to("/urls"))
}
