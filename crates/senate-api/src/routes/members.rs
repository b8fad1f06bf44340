//! # Member Routes
//!
//! - `GET /v1/members`: member cards that pass the query filter, in roster
//!   order, with the active filter tags.
//! - `GET /v1/members/:id`: one member's profile (the pop-up view).

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use senate_core::{capitalize_first, Criterion, MemberRecord};

use crate::error::AppError;
use crate::extractors::FilterQuery;
use crate::state::AppState;

/// A member as rendered on a card or profile.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberView {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// `First "Nick" Last`.
    pub display_name: String,
    /// `First (Nick) Last`.
    pub popup_name: String,
    pub party: String,
    /// Capitalized party label, e.g. "Democrat".
    pub party_label: String,
    pub state: String,
    pub rank: String,
    pub gender: String,
    pub birthday: String,
    pub start_date: String,
    pub age: i32,
    pub years_in_office: i32,
    pub office: Option<String>,
    pub website: Option<String>,
    pub twitter_url: Option<String>,
    pub youtube_url: Option<String>,
    pub leadership_title: Option<String>,
    pub image_url: Option<String>,
}

impl From<&MemberRecord> for MemberView {
    fn from(r: &MemberRecord) -> Self {
        Self {
            id: r.id.to_string(),
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
            nickname: r.nickname.clone(),
            display_name: r.display_name(),
            popup_name: r.popup_name(),
            party: r.party.as_str().to_string(),
            party_label: capitalize_first(r.party.as_str()),
            state: r.state.to_string(),
            rank: r.rank.as_str().to_string(),
            gender: r.gender.as_str().to_string(),
            birthday: r.birthday.to_string(),
            start_date: r.start_date.to_string(),
            age: r.age,
            years_in_office: r.years_in_office,
            office: r.office.clone(),
            website: r.website.clone(),
            twitter_url: r.twitter_url(),
            youtube_url: r.youtube_url(),
            leadership_title: r.leadership_title.clone(),
            image_url: r.image_url.clone(),
        }
    }
}

/// One active filter selection, as shown on a removable tag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilterTag {
    pub field: String,
    pub value: String,
}

impl From<&Criterion> for FilterTag {
    fn from(c: &Criterion) -> Self {
        Self {
            field: c.field().as_str().to_string(),
            value: c.value().to_string(),
        }
    }
}

/// Filtered member list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberListResponse {
    /// Size of the full roster.
    pub total: usize,
    /// Number of members that passed the filter.
    pub count: usize,
    pub tags: Vec<FilterTag>,
    /// Lower-cased name prefix; empty when unrestricted.
    pub name: String,
    pub members: Vec<MemberView>,
}

/// Build the member router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/members", get(list_members))
        .route("/v1/members/:id", get(get_member))
}

/// GET /v1/members: Members passing the filter, in roster order.
#[utoipa::path(
    get,
    path = "/v1/members",
    params(FilterQuery),
    responses(
        (status = 200, description = "Filtered members", body = MemberListResponse),
        (status = 422, description = "Unknown filter value", body = crate::error::ErrorBody),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "members"
)]
pub(crate) async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<MemberListResponse>, AppError> {
    let loaded = state.loaded()?;
    let filter = query.to_filter_state()?;
    let members: Vec<MemberView> = loaded
        .roster
        .filter(&filter)
        .into_iter()
        .map(MemberView::from)
        .collect();
    Ok(Json(MemberListResponse {
        total: loaded.roster.len(),
        count: members.len(),
        tags: filter.criteria().iter().map(FilterTag::from).collect(),
        name: filter.name().to_string(),
        members,
    }))
}

/// GET /v1/members/:id: One member's profile.
#[utoipa::path(
    get,
    path = "/v1/members/{id}",
    params(("id" = String, Path, description = "Bioguide identifier")),
    responses(
        (status = 200, description = "Member profile", body = MemberView),
        (status = 404, description = "Unknown member", body = crate::error::ErrorBody),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "members"
)]
pub(crate) async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MemberView>, AppError> {
    let loaded = state.loaded()?;
    loaded
        .roster
        .get(&id)
        .map(|r| Json(MemberView::from(r)))
        .ok_or_else(|| AppError::not_found(format!("member {id}")))
}
