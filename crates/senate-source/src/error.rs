//! Source loading error types.

use senate_core::{SenateError, ValidationError};

use crate::config::ConfigError;

/// Which of the two input documents an error concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Members,
    Images,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::Images => "images",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a roster load. No partial roster is ever built.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Local file could not be read.
    #[error("failed to read {kind} source {location}: {source}")]
    Io {
        kind: SourceKind,
        location: String,
        source: std::io::Error,
    },
    /// HTTP transport error.
    #[error("HTTP error fetching {kind} source {location}: {source}")]
    Http {
        kind: SourceKind,
        location: String,
        source: reqwest::Error,
    },
    /// Remote source answered with a non-2xx status.
    #[error("{kind} source {location} returned {status}")]
    Status {
        kind: SourceKind,
        location: String,
        status: u16,
    },
    /// Document is not valid JSON for its schema.
    #[error("failed to parse {kind} source: {source}")]
    Parse {
        kind: SourceKind,
        source: serde_json::Error,
    },
    /// A member record failed validation.
    #[error("invalid member record #{index} ({id}): {source}")]
    Normalize {
        index: usize,
        id: String,
        source: ValidationError,
    },
    /// Records are individually valid but do not form a roster.
    #[error("invalid roster: {0}")]
    Roster(#[from] SenateError),
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SourceError {
    /// The input document the error concerns, when there is one.
    pub fn kind(&self) -> Option<SourceKind> {
        match self {
            Self::Io { kind, .. }
            | Self::Http { kind, .. }
            | Self::Status { kind, .. }
            | Self::Parse { kind, .. } => Some(*kind),
            Self::Normalize { .. } | Self::Roster(_) => Some(SourceKind::Members),
            Self::Config(_) => None,
        }
    }
}
