//! # Leadership
//!
//! `GET /v1/leaders`: members holding a leadership title, by party.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use senate_core::capitalize_first;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderView {
    pub id: String,
    /// `First "Nick" Last`.
    pub name: String,
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeadershipSectionView {
    pub party: String,
    pub label: String,
    pub leaders: Vec<LeaderView>,
}

/// Build the leadership router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/leaders", get(list_leaders))
}

/// GET /v1/leaders: Leadership roster.
#[utoipa::path(
    get,
    path = "/v1/leaders",
    responses(
        (status = 200, description = "Leaders grouped by party", body = Vec<LeadershipSectionView>),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "members"
)]
pub(crate) async fn list_leaders(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeadershipSectionView>>, AppError> {
    let loaded = state.loaded()?;
    let sections = loaded
        .roster
        .leadership()
        .into_iter()
        .map(|section| LeadershipSectionView {
            party: section.party.as_str().to_string(),
            label: capitalize_first(section.party.as_str()),
            leaders: section
                .leaders
                .iter()
                .filter_map(|r| {
                    r.leadership_title.as_ref().map(|title| LeaderView {
                        id: r.id.to_string(),
                        name: r.display_name(),
                        title: title.clone(),
                    })
                })
                .collect(),
        })
        .collect();
    Ok(Json(sections))
}
