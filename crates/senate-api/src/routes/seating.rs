//! # Seating Chart
//!
//! `GET /v1/seating`: seat coordinates for the full roster in load order.
//! `group_size` overrides the configured members per arc.

use std::num::NonZeroUsize;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use senate_core::{SeatingLayout, SeatingParams};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeatingQuery {
    /// Members per arc; must be at least 1.
    pub group_size: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatView {
    pub member_id: String,
    pub party: String,
    pub color: String,
    /// Portrait shown on hover, when the member has one.
    pub image_url: Option<String>,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatGroupView {
    pub index: usize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub distance: f64,
    pub seats: Vec<SeatView>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatingResponse {
    pub group_size: usize,
    pub groups: Vec<SeatGroupView>,
}

impl SeatingResponse {
    fn new(params: &SeatingParams, layout: SeatingLayout) -> Self {
        Self {
            group_size: params.group_size.get(),
            groups: layout
                .groups
                .into_iter()
                .map(|g| SeatGroupView {
                    index: g.index,
                    origin_x: g.origin_x,
                    origin_y: g.origin_y,
                    distance: g.distance,
                    seats: g
                        .seats
                        .into_iter()
                        .map(|s| SeatView {
                            color: s.color().to_string(),
                            member_id: s.member_id.into(),
                            party: s.party.as_str().to_string(),
                            image_url: s.image_url,
                            x: s.x,
                            y: s.y,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Build the seating router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/seating", get(get_seating))
}

/// GET /v1/seating: Seating layout.
#[utoipa::path(
    get,
    path = "/v1/seating",
    params(SeatingQuery),
    responses(
        (status = 200, description = "Seat coordinates by arc", body = SeatingResponse),
        (status = 422, description = "Invalid group size", body = crate::error::ErrorBody),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "seating"
)]
pub(crate) async fn get_seating(
    State(state): State<AppState>,
    Query(query): Query<SeatingQuery>,
) -> Result<Json<SeatingResponse>, AppError> {
    let loaded = state.loaded()?;
    let mut params = loaded.seating;
    if let Some(size) = query.group_size {
        params.group_size = NonZeroUsize::new(size)
            .ok_or_else(|| AppError::Validation("group_size must be at least 1".into()))?;
    }
    let layout = loaded.roster.seating(&params);
    Ok(Json(SeatingResponse::new(&params, layout)))
}
