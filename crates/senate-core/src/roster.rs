//! # Roster
//!
//! The loaded member list plus the filter-option catalogue derived from it.
//! Built once per load and never mutated afterwards; everything downstream
//! borrows from it.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::SenateError;
use crate::filter::{self, FilterState, Visibility};
use crate::identity::MemberId;
use crate::leadership::{self, LeadershipSection};
use crate::member::{MemberProfile, MemberRecord};
use crate::options::FilterOptions;
use crate::seating::{self, SeatingLayout, SeatingParams};
use crate::stats::{self, Statistics};

#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<MemberRecord>,
    options: FilterOptions,
    as_of: Option<NaiveDate>,
}

impl Roster {
    /// Build records from `profiles`, deriving age and tenure against
    /// `today`. Input order is kept.
    ///
    /// # Errors
    ///
    /// Returns [`SenateError::DuplicateMember`] if two profiles share an id.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = MemberProfile>,
        today: NaiveDate,
    ) -> Result<Self, SenateError> {
        let records = profiles
            .into_iter()
            .map(|p| MemberRecord::new(p, today))
            .collect();
        let mut roster = Self::from_records(records)?;
        roster.as_of = Some(today);
        Ok(roster)
    }

    /// Wrap already-built records.
    ///
    /// # Errors
    ///
    /// Returns [`SenateError::DuplicateMember`] if two records share an id.
    pub fn from_records(records: Vec<MemberRecord>) -> Result<Self, SenateError> {
        {
            let mut seen: HashSet<&MemberId> = HashSet::with_capacity(records.len());
            for r in &records {
                if !seen.insert(&r.id) {
                    return Err(SenateError::DuplicateMember(r.id.to_string()));
                }
            }
        }
        let options = FilterOptions::from_records(&records);
        Ok(Self {
            records,
            options,
            as_of: None,
        })
    }

    pub fn records(&self) -> &[MemberRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reference date the derived values were computed against.
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn get(&self, id: &str) -> Option<&MemberRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    pub fn filter(&self, state: &FilterState) -> Vec<&MemberRecord> {
        filter::filter(&self.records, state)
    }

    pub fn visibility(&self, state: &FilterState) -> Visibility {
        filter::partition_visibility(&self.records, state)
    }

    /// Statistics over the members `state` lets through.
    pub fn statistics(&self, state: &FilterState) -> Statistics {
        stats::compute_statistics(self.filter(state))
    }

    pub fn leadership(&self) -> Vec<LeadershipSection<&MemberRecord>> {
        leadership::leadership_roster(&self.records)
    }

    /// Seating for the full roster in load order.
    pub fn seating(&self, params: &SeatingParams) -> SeatingLayout {
        let refs: Vec<&MemberRecord> = self.records.iter().collect();
        seating::compute_seating_layout(&refs, params)
    }
}
