//! Handler for the JSON dump of the link table.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Serialized form of a link for the export endpoint.
#[derive(Debug, Serialize)]
pub struct LinkExport {
    pub code: String,
    pub long_url: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkExport {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            long_url: link.long_url,
            owner_id: link.owner_id,
            created_at: link.created_at,
        }
    }
}

/// Serializes the entire link table as JSON, in insertion order.
///
/// # Endpoint
///
/// `GET /urls.json`
///
/// Public and unfiltered, including owner ids, mirroring the original's
/// debug-style dump. The one endpoint that bypasses the HTML renderer.
pub async fn export_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkExport>>, AppError> {
    let links = state.link_service.list_all_links().await?;
    Ok(Json(links.into_iter().map(LinkExport::from).collect()))
}
