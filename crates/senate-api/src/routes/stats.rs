//! # Statistics
//!
//! `GET /v1/stats`: party breakdown, gender ratio, average age and the
//! tenure histogram. Without filter parameters the overview computed at
//! load is returned; with them the same aggregates are computed over the
//! filtered members.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use senate_core::{capitalize_first, Statistics};

use crate::error::AppError;
use crate::extractors::FilterQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PartyCountView {
    pub party: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenderShareView {
    pub gender: String,
    pub count: usize,
    /// Truncated integer percentage.
    pub percent: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TenureBucketView {
    pub years: i32,
    pub count: usize,
    /// Bar width relative to the largest bucket, 0 to 100.
    pub width_percent: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TenureView {
    pub buckets: Vec<TenureBucketView>,
    pub max_count: usize,
    /// Axis ticks `[0, max / 2, max]`.
    pub axis: Vec<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    /// "overview" for the full roster, "filtered" otherwise.
    pub scope: String,
    pub total: usize,
    pub party_counts: Vec<PartyCountView>,
    pub gender: Vec<GenderShareView>,
    /// Mean age; absent for an empty member list.
    pub average_age: Option<f64>,
    /// Mean age truncated to a whole number.
    pub average_age_display: Option<i64>,
    pub tenure: TenureView,
}

impl StatsResponse {
    fn new(scope: &str, stats: &Statistics) -> Self {
        Self {
            scope: scope.to_string(),
            total: stats.total,
            party_counts: stats
                .party_counts
                .iter()
                .map(|p| PartyCountView {
                    party: p.party.as_str().to_string(),
                    label: capitalize_first(p.party.as_str()),
                    count: p.count,
                })
                .collect(),
            gender: stats
                .gender
                .iter()
                .map(|g| GenderShareView {
                    gender: g.gender.as_str().to_string(),
                    count: g.count,
                    percent: g.percent,
                })
                .collect(),
            average_age: stats.average_age,
            average_age_display: stats.average_age_display(),
            tenure: TenureView {
                buckets: stats
                    .tenure
                    .buckets
                    .iter()
                    .map(|b| TenureBucketView {
                        years: b.years,
                        count: b.count,
                        width_percent: b.width_percent,
                    })
                    .collect(),
                max_count: stats.tenure.max_count,
                axis: stats.tenure.axis.to_vec(),
            },
        }
    }
}

/// Build the statistics router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/stats", get(get_stats))
}

/// GET /v1/stats: Overview or filtered statistics.
#[utoipa::path(
    get,
    path = "/v1/stats",
    params(FilterQuery),
    responses(
        (status = 200, description = "Aggregate statistics", body = StatsResponse),
        (status = 422, description = "Unknown filter value", body = crate::error::ErrorBody),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "stats"
)]
pub(crate) async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let loaded = state.loaded()?;
    if query.is_empty() {
        return Ok(Json(StatsResponse::new("overview", &loaded.overview)));
    }
    let filter = query.to_filter_state()?;
    let stats = loaded.roster.statistics(&filter);
    Ok(Json(StatsResponse::new("filtered", &stats)))
}
