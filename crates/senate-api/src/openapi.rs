//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec.
//! Serves at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Senate Roster API",
        version = "0.1.0",
        description = "Filterable views over the senate roster: member cards, filter options, statistics, leadership and the seating chart.\n\nData routes answer 503 with a structured error body when the roster failed to load. Health probes (`/health/*`) are always available."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // ── Members ──────────────────────────────────────────────────────
        crate::routes::members::list_members,
        crate::routes::members::get_member,
        crate::routes::options::list_options,
        crate::routes::leaders::list_leaders,
        // ── Statistics ───────────────────────────────────────────────────
        crate::routes::stats::get_stats,
        // ── Seating ──────────────────────────────────────────────────────
        crate::routes::seating::get_seating,
        // ── Session filter ───────────────────────────────────────────────
        crate::routes::session::get_filter,
        crate::routes::session::add_criterion,
        crate::routes::session::remove_criterion,
        crate::routes::session::set_name,
        crate::routes::session::reset_filter,
        crate::routes::session::get_visibility,
    ),
    components(
        schemas(
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
            crate::routes::members::MemberView,
            crate::routes::members::FilterTag,
            crate::routes::members::MemberListResponse,
            crate::routes::options::FieldOptions,
            crate::routes::leaders::LeaderView,
            crate::routes::leaders::LeadershipSectionView,
            crate::routes::stats::StatsResponse,
            crate::routes::stats::PartyCountView,
            crate::routes::stats::GenderShareView,
            crate::routes::stats::TenureView,
            crate::routes::stats::TenureBucketView,
            crate::routes::seating::SeatingResponse,
            crate::routes::seating::SeatGroupView,
            crate::routes::seating::SeatView,
            crate::routes::session::CriterionRequest,
            crate::routes::session::NameRequest,
            crate::routes::session::SessionFilterView,
            crate::routes::session::VisibilityView,
        ),
    ),
    tags(
        (name = "members", description = "Member cards, profiles, filter options and leadership"),
        (name = "stats", description = "Party breakdown, gender ratio, average age and tenure histogram"),
        (name = "seating", description = "Seating chart coordinates"),
        (name = "session", description = "Server-held session filter and member visibility"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
