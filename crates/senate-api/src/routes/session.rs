//! # Session Filter
//!
//! The server-held [`FilterState`] a single interactive client builds up
//! by clicking options and typing a name.
//!
//! - `GET /v1/session/filter`: current selections
//! - `POST /v1/session/filter/criteria`: add `{field, value}`
//! - `DELETE /v1/session/filter/criteria/:field/:value`: remove one
//! - `PUT /v1/session/filter/name`: set the name prefix
//! - `POST /v1/session/filter/reset`: clear everything
//! - `GET /v1/session/visibility`: visible and hidden member ids
//!
//! The write lock is taken only for the mutation itself.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use senate_core::{Criterion, FilterField, FilterState};

use crate::error::AppError;
use crate::routes::members::FilterTag;
use crate::state::AppState;

/// Request body for adding a selection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CriterionRequest {
    /// One of party, state, rank, gender, name.
    pub field: String,
    pub value: String,
}

/// Request body for setting the name prefix.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NameRequest {
    pub name: String,
}

/// The session filter as seen by the client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionFilterView {
    pub tags: Vec<FilterTag>,
    pub name: String,
    pub unrestricted: bool,
    /// Whether the last mutation changed the state. Always false on reads.
    pub changed: bool,
}

impl SessionFilterView {
    fn new(filter: &FilterState, changed: bool) -> Self {
        Self {
            tags: filter.criteria().iter().map(FilterTag::from).collect(),
            name: filter.name().to_string(),
            unrestricted: filter.is_unrestricted(),
            changed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VisibilityView {
    pub visible: Vec<String>,
    pub hidden: Vec<String>,
}

/// Build the session router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/session/filter", get(get_filter))
        .route("/v1/session/filter/criteria", post(add_criterion))
        .route(
            "/v1/session/filter/criteria/:field/:value",
            delete(remove_criterion),
        )
        .route("/v1/session/filter/name", put(set_name))
        .route("/v1/session/filter/reset", post(reset_filter))
        .route("/v1/session/visibility", get(get_visibility))
}

fn parse_criterion(field: &str, value: &str) -> Result<Criterion, AppError> {
    let field: FilterField = field.parse()?;
    Ok(Criterion::parse(field, value)?)
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// GET /v1/session/filter: Current session filter.
#[utoipa::path(
    get,
    path = "/v1/session/filter",
    responses(
        (status = 200, description = "Session filter", body = SessionFilterView),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "session"
)]
pub(crate) async fn get_filter(
    State(state): State<AppState>,
) -> Result<Json<SessionFilterView>, AppError> {
    state.loaded()?;
    let filter = state.session().read();
    Ok(Json(SessionFilterView::new(&filter, false)))
}

/// POST /v1/session/filter/criteria: Add a selection.
#[utoipa::path(
    post,
    path = "/v1/session/filter/criteria",
    request_body = CriterionRequest,
    responses(
        (status = 200, description = "Updated session filter", body = SessionFilterView),
        (status = 422, description = "Unknown field or value", body = crate::error::ErrorBody),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "session"
)]
pub(crate) async fn add_criterion(
    State(state): State<AppState>,
    payload: Result<Json<CriterionRequest>, JsonRejection>,
) -> Result<Json<SessionFilterView>, AppError> {
    state.loaded()?;
    let req = json_body(payload)?;
    let criterion = parse_criterion(&req.field, &req.value)?;
    let mut filter = state.session().write();
    let changed = filter.add_filter(criterion);
    tracing::debug!(field = %req.field, value = %req.value, changed, "session filter added");
    Ok(Json(SessionFilterView::new(&filter, changed)))
}

/// DELETE /v1/session/filter/criteria/:field/:value: Remove a selection.
#[utoipa::path(
    delete,
    path = "/v1/session/filter/criteria/{field}/{value}",
    params(
        ("field" = String, Path, description = "Filter field"),
        ("value" = String, Path, description = "Value to remove"),
    ),
    responses(
        (status = 200, description = "Updated session filter", body = SessionFilterView),
        (status = 422, description = "Unknown field or value", body = crate::error::ErrorBody),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "session"
)]
pub(crate) async fn remove_criterion(
    State(state): State<AppState>,
    Path((field, value)): Path<(String, String)>,
) -> Result<Json<SessionFilterView>, AppError> {
    state.loaded()?;
    let criterion = parse_criterion(&field, &value)?;
    let mut filter = state.session().write();
    let changed = filter.remove_filter(&criterion);
    tracing::debug!(%field, %value, changed, "session filter removed");
    Ok(Json(SessionFilterView::new(&filter, changed)))
}

/// PUT /v1/session/filter/name: Set the name prefix. An empty name clears it.
#[utoipa::path(
    put,
    path = "/v1/session/filter/name",
    request_body = NameRequest,
    responses(
        (status = 200, description = "Updated session filter", body = SessionFilterView),
        (status = 422, description = "Malformed body", body = crate::error::ErrorBody),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "session"
)]
pub(crate) async fn set_name(
    State(state): State<AppState>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<SessionFilterView>, AppError> {
    state.loaded()?;
    let req = json_body(payload)?;
    let mut filter = state.session().write();
    let changed = filter.add_filter(Criterion::Name(req.name));
    Ok(Json(SessionFilterView::new(&filter, changed)))
}

/// POST /v1/session/filter/reset: Clear every selection and the name.
#[utoipa::path(
    post,
    path = "/v1/session/filter/reset",
    responses(
        (status = 200, description = "Empty session filter", body = SessionFilterView),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "session"
)]
pub(crate) async fn reset_filter(
    State(state): State<AppState>,
) -> Result<Json<SessionFilterView>, AppError> {
    state.loaded()?;
    let mut filter = state.session().write();
    let changed = !filter.is_unrestricted();
    filter.reset();
    tracing::debug!(changed, "session filter reset");
    Ok(Json(SessionFilterView::new(&filter, changed)))
}

/// GET /v1/session/visibility: Which members the session filter shows.
#[utoipa::path(
    get,
    path = "/v1/session/visibility",
    responses(
        (status = 200, description = "Visible and hidden member ids", body = VisibilityView),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "session"
)]
pub(crate) async fn get_visibility(
    State(state): State<AppState>,
) -> Result<Json<VisibilityView>, AppError> {
    let loaded = state.loaded()?;
    let filter = state.session().read().clone();
    let vis = loaded.roster.visibility(&filter);
    Ok(Json(VisibilityView {
        visible: vis.visible.into_iter().map(String::from).collect(),
        hidden: vis.hidden.into_iter().map(String::from).collect(),
    }))
}
