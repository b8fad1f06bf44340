//! # senate-api: Axum HTTP Service for the Senate Roster
//!
//! JSON views over the loaded roster: filtered member cards, the
//! filter-option catalogue, statistics, the leadership roster and the
//! seating chart, plus a server-held session filter for a single
//! interactive client.
//!
//! ## API Surface
//!
//! | Prefix                | Module                 | Domain                    |
//! |-----------------------|------------------------|---------------------------|
//! | `/v1/members/*`       | [`routes::members`]    | Member cards and profiles |
//! | `/v1/filter-options`  | [`routes::options`]    | Option catalogue          |
//! | `/v1/stats`           | [`routes::stats`]      | Aggregates                |
//! | `/v1/leaders`         | [`routes::leaders`]    | Leadership roster         |
//! | `/v1/seating`         | [`routes::seating`]    | Seating chart             |
//! | `/v1/session/*`       | [`routes::session`]    | Session filter            |
//!
//! ## Load failure
//!
//! The service starts even when the roster fails to load. Health liveness
//! stays `ok`; readiness and every data route answer 503 with the failure.
//!
//! ## OpenAPI
//!
//! Generated via utoipa derive macros at `/openapi.json`.

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::members::router())
        .merge(routes::options::router())
        .merge(routes::stats::router())
        .merge(routes::leaders::router())
        .merge(routes::seating::router())
        .merge(routes::session::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 200 "ready" once the roster is loaded, otherwise 503
/// with the load failure.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.load_error() {
        None => (StatusCode::OK, "ready".to_string()).into_response(),
        Some(reason) => {
            tracing::warn!(%reason, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("roster failed to load: {reason}"),
            )
                .into_response()
        }
    }
}
