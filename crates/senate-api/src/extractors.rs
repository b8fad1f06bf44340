//! # Filter Query Parameters
//!
//! Query-string form of a [`FilterState`], shared by the member list and
//! the statistics endpoint. Categorical fields take comma-separated lists;
//! `name` is a prefix.
//!
//! ```text
//! /v1/members?party=democrat,independent&state=VT&name=san
//! ```

use serde::Deserialize;
use utoipa::IntoParams;

use senate_core::{Criterion, FilterField, FilterState, ValidationError};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    /// Comma-separated parties (democrat, republican, independent).
    pub party: Option<String>,
    /// Comma-separated two-letter state codes.
    pub state: Option<String>,
    /// Comma-separated ranks (junior, senior).
    pub rank: Option<String>,
    /// Comma-separated genders (female, male).
    pub gender: Option<String>,
    /// Case-insensitive first- or last-name prefix.
    pub name: Option<String>,
}

impl FilterQuery {
    /// Whether any parameter was supplied.
    pub fn is_empty(&self) -> bool {
        self.party.is_none()
            && self.state.is_none()
            && self.rank.is_none()
            && self.gender.is_none()
            && self.name.is_none()
    }

    /// Parse into a filter. Blank list entries are skipped.
    pub fn to_filter_state(&self) -> Result<FilterState, ValidationError> {
        let mut criteria = Vec::new();
        let lists = [
            (FilterField::Party, &self.party),
            (FilterField::State, &self.state),
            (FilterField::Rank, &self.rank),
            (FilterField::Gender, &self.gender),
        ];
        for (field, raw) in lists {
            let Some(raw) = raw else { continue };
            for value in raw.split(',').map(str::trim).filter(|v| !v.is_empty()) {
                criteria.push(Criterion::parse(field, value)?);
            }
        }
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            criteria.push(Criterion::Name(name.to_string()));
        }
        Ok(FilterState::from_criteria(criteria))
    }
}
