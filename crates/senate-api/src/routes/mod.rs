//! # API Route Modules
//!
//! - `members`: filtered member cards and single-member profiles.
//! - `options`: filter-option catalogue with type-ahead search.
//! - `stats`: overview and filtered statistics.
//! - `leaders`: leadership roster grouped by party.
//! - `seating`: seating chart coordinates.
//! - `session`: the server-held session filter and member visibility.

pub mod leaders;
pub mod members;
pub mod options;
pub mod seating;
pub mod session;
pub mod stats;
