//! # senate-core: Roster Types, Filtering and Aggregates
//!
//! The pure core of the senate roster. It takes a list of normalized member
//! records and answers two questions: which members does the current
//! selection let through, and what do the numbers look like. It performs no
//! I/O; loading lives in `senate-source` and rendering in `senate-api` and
//! `senate-cli`.
//!
//! ## Key Design Principles
//!
//! 1. **One enum per categorical domain.** [`Party`], [`Rank`], [`Gender`]
//!    and [`FilterField`] are closed sets. Unknown field names and
//!    out-of-domain values are rejected where text enters the system, as a
//!    [`ValidationError`].
//!
//! 2. **Empty means unrestricted.** An empty accepted-value set imposes no
//!    restriction. [`FilterState::default`] matches every record.
//!
//! 3. **Derived values are fixed per load.** Age and years in office are
//!    computed once in [`MemberRecord::new`] against the load date.
//!
//! 4. **Pure aggregates.** [`compute_statistics`], [`compute_seating_layout`]
//!    and [`leadership_roster`] are deterministic functions of their input
//!    order.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `senate-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Public data types derive `Debug`, `Clone` and serde traits.

pub mod error;
pub mod filter;
pub mod identity;
pub mod leadership;
pub mod member;
pub mod options;
pub mod roster;
pub mod seating;
pub mod stats;

pub use error::{SenateError, ValidationError};
pub use filter::{filter, partition_visibility, Criterion, FilterField, FilterState, Visibility};
pub use identity::{MemberId, StateCode};
pub use leadership::{leadership_roster, LeadershipSection};
pub use member::{capitalize_first, Gender, MemberProfile, MemberRecord, Party, Rank};
pub use options::FilterOptions;
pub use roster::Roster;
pub use seating::{
    compute_seating_layout, Seat, SeatGroup, SeatingLayout, SeatingParams, DEFAULT_GROUP_SIZE,
};
pub use stats::{
    compute_statistics, GenderShare, PartyCount, Statistics, TenureBucket, TenureHistogram,
};
