//! # Application State
//!
//! Shared state for the Axum application: the loaded roster with its
//! overview statistics, the seating parameters and the session filter.
//!
//! The roster is immutable and shared through an `Arc`. The session
//! [`FilterState`] is the only mutable structure and sits behind a
//! `parking_lot::RwLock`; handlers never hold the lock across `.await`.
//!
//! When the initial load fails the state records the failure instead, and
//! every data route answers 503 naming it.

use std::sync::Arc;

use parking_lot::RwLock;

use senate_core::{compute_statistics, FilterState, Roster, SeatingParams, Statistics};
use senate_source::SourceError;

use crate::error::AppError;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl AppConfig {
    /// `PORT` (default: 8080).
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        Self { port }
    }
}

/// The roster together with values computed once at load.
#[derive(Debug)]
pub struct LoadedRoster {
    pub roster: Roster,
    /// Statistics over the full roster.
    pub overview: Statistics,
    pub seating: SeatingParams,
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    data: Result<Arc<LoadedRoster>, Arc<str>>,
    session: Arc<RwLock<FilterState>>,
}

impl AppState {
    /// State over a loaded roster with default configuration.
    pub fn new(roster: Roster) -> Self {
        Self::with_config(AppConfig::default(), roster, SeatingParams::default())
    }

    pub fn with_config(config: AppConfig, roster: Roster, seating: SeatingParams) -> Self {
        let overview = compute_statistics(roster.records());
        Self {
            config,
            data: Ok(Arc::new(LoadedRoster {
                roster,
                overview,
                seating,
            })),
            session: Arc::new(RwLock::new(FilterState::new())),
        }
    }

    /// State for a service whose roster failed to load.
    pub fn unavailable(config: AppConfig, reason: impl Into<String>) -> Self {
        let reason: String = reason.into();
        Self {
            config,
            data: Err(Arc::from(reason)),
            session: Arc::new(RwLock::new(FilterState::new())),
        }
    }

    /// Build from the outcome of a load.
    pub fn from_load(
        config: AppConfig,
        loaded: Result<Roster, SourceError>,
        seating: SeatingParams,
    ) -> Self {
        match loaded {
            Ok(roster) => Self::with_config(config, roster, seating),
            Err(e) => Self::unavailable(config, e.to_string()),
        }
    }

    /// The loaded roster, or a 503 naming the load failure.
    pub fn loaded(&self) -> Result<&LoadedRoster, AppError> {
        match &self.data {
            Ok(loaded) => Ok(loaded.as_ref()),
            Err(reason) => Err(AppError::service_unavailable(format!(
                "roster failed to load: {reason}"
            ))),
        }
    }

    /// The load failure, if any.
    pub fn load_error(&self) -> Option<&str> {
        self.data.as_ref().err().map(|reason| &**reason)
    }

    pub fn session(&self) -> &RwLock<FilterState> {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_state_reports_reason() {
        let state = AppState::unavailable(AppConfig::default(), "members source missing");
        assert_eq!(state.load_error(), Some("members source missing"));
        let err = state.loaded().unwrap_err();
        assert!(err.to_string().contains("members source missing"));
    }

    #[test]
    fn loaded_state_caches_overview() {
        let state = AppState::new(Roster::default());
        assert!(state.load_error().is_none());
        assert_eq!(state.loaded().unwrap().overview.total, 0);
    }

    #[test]
    fn session_is_shared_between_clones() {
        let state = AppState::new(Roster::default());
        let clone = state.clone();
        clone
            .session()
            .write()
            .add_filter(senate_core::Criterion::Name("jo".into()));
        assert_eq!(state.session().read().name(), "jo");
    }

    #[test]
    fn default_port() {
        assert_eq!(AppConfig::default().port, 8080);
    }
}
