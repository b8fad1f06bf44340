//! # senate-source: Loading the Member and Image Documents
//!
//! Reads the two pre-fetched JSON documents, from disk or over HTTP,
//! normalizes them into [`senate_core::MemberProfile`]s and builds a
//! [`senate_core::Roster`].
//!
//! ## Input documents
//!
//! | Document | Shape |
//! |----------|-------|
//! | members  | `{ "objects": [ { "person": {..}, "party", "state", "senator_rank", "extra": {"office"}, "startdate", "website", "leadership_title" } ] }` |
//! | images   | `{ "<bioguideid>": "<url>" }` |
//!
//! Both are read concurrently with `tokio::try_join!`; either failure
//! aborts the load and nothing partial is returned.

pub mod config;
pub mod error;
pub mod loader;
pub mod raw;

pub use config::{ConfigError, SourceConfig, SourceLocation};
pub use error::{SourceError, SourceKind};
pub use loader::{load_roster, SourceLoader};
pub use raw::{normalize, ImageTable, RawMemberFile};
