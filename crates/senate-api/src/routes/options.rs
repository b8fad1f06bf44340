//! # Filter Options
//!
//! `GET /v1/filter-options`: the distinct values of each categorical field
//! present in the roster, optionally narrowed to one field and a
//! type-ahead prefix.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use senate_core::FilterField;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OptionsQuery {
    /// Restrict to one field: party, state, rank or gender.
    pub field: Option<String>,
    /// Case-insensitive prefix the options must start with.
    pub prefix: Option<String>,
}

/// The options of one field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FieldOptions {
    pub field: String,
    pub values: Vec<String>,
}

/// Build the options router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/filter-options", get(list_options))
}

/// GET /v1/filter-options: Catalogue of selectable values.
#[utoipa::path(
    get,
    path = "/v1/filter-options",
    params(OptionsQuery),
    responses(
        (status = 200, description = "Options per field", body = Vec<FieldOptions>),
        (status = 422, description = "Unknown or non-categorical field", body = crate::error::ErrorBody),
        (status = 503, description = "Roster failed to load", body = crate::error::ErrorBody),
    ),
    tag = "members"
)]
pub(crate) async fn list_options(
    State(state): State<AppState>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<Vec<FieldOptions>>, AppError> {
    let loaded = state.loaded()?;
    let fields: Vec<FilterField> = match query.field.as_deref() {
        Some(raw) => {
            let field: FilterField = raw.parse()?;
            if !field.is_categorical() {
                return Err(AppError::Validation(format!(
                    "field {field} has no option list"
                )));
            }
            vec![field]
        }
        None => FilterField::categorical().to_vec(),
    };
    let prefix = query.prefix.as_deref().unwrap_or("");
    let options = loaded.roster.options();
    Ok(Json(
        fields
            .into_iter()
            .map(|field| FieldOptions {
                field: field.as_str().to_string(),
                values: options.search(field, prefix),
            })
            .collect(),
    ))
}
