//! # Filter State and Filter Engine
//!
//! [`FilterState`] is the mutable, multi-criterion selection the user
//! builds up: one set of accepted values per categorical field plus a
//! case-insensitive name prefix. [`filter`] applies it to a record list.
//!
//! ## Inclusion rule
//!
//! A record is kept iff, for **every** categorical field, the accepted set
//! is empty or contains the record's value, **and** the name prefix is empty
//! or matches the start of the first or last name (case-insensitive).
//!
//! That is AND across fields, OR within a field's value set, OR across the
//! two name parts. An empty set means "no restriction", never "exclude
//! everything".

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::{MemberId, StateCode};
use crate::member::{Gender, MemberRecord, Party, Rank};

/// The closed set of fields a filter can restrict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Party,
    State,
    Rank,
    Gender,
    Name,
}

impl FilterField {
    /// Fields filtered by set membership, in display order.
    pub fn categorical() -> &'static [FilterField] {
        &[Self::Party, Self::State, Self::Rank, Self::Gender]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Party => "party",
            Self::State => "state",
            Self::Rank => "rank",
            Self::Gender => "gender",
            Self::Name => "name",
        }
    }

    /// Whether the field is matched by set membership rather than prefix.
    pub fn is_categorical(&self) -> bool {
        !matches!(self, Self::Name)
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "party" => Ok(Self::Party),
            "state" => Ok(Self::State),
            "rank" => Ok(Self::Rank),
            "gender" => Ok(Self::Gender),
            "name" => Ok(Self::Name),
            _ => Err(ValidationError::UnknownField(s.to_string())),
        }
    }
}

/// One `(field, value)` selection, typed by field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Criterion {
    Party(Party),
    State(StateCode),
    Rank(Rank),
    Gender(Gender),
    /// Name prefix; stored lower-cased by [`FilterState::add_filter`].
    Name(String),
}

impl Criterion {
    /// Interpret raw presentation input for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] when `raw` is outside the
    /// field's domain (e.g. `party = "whig"`).
    pub fn parse(field: FilterField, raw: &str) -> Result<Self, ValidationError> {
        Ok(match field {
            FilterField::Party => Self::Party(raw.parse()?),
            FilterField::State => Self::State(raw.parse()?),
            FilterField::Rank => Self::Rank(raw.parse()?),
            FilterField::Gender => Self::Gender(raw.parse()?),
            FilterField::Name => Self::Name(raw.to_string()),
        })
    }

    pub fn field(&self) -> FilterField {
        match self {
            Self::Party(_) => FilterField::Party,
            Self::State(_) => FilterField::State,
            Self::Rank(_) => FilterField::Rank,
            Self::Gender(_) => FilterField::Gender,
            Self::Name(_) => FilterField::Name,
        }
    }

    /// The value as it is displayed on a filter tag.
    pub fn value(&self) -> &str {
        match self {
            Self::Party(p) => p.as_str(),
            Self::State(s) => s.as_str(),
            Self::Rank(r) => r.as_str(),
            Self::Gender(g) => g.as_str(),
            Self::Name(n) => n,
        }
    }
}

/// Current user-selected restriction criteria.
///
/// Created empty (no restriction); mutated by [`add_filter`](Self::add_filter)
/// and [`remove_filter`](Self::remove_filter); [`reset`](Self::reset) restores
/// the empty state exactly, including the name prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    party: BTreeSet<Party>,
    state: BTreeSet<StateCode>,
    rank: BTreeSet<Rank>,
    gender: BTreeSet<Gender>,
    name: String,
}

impl FilterState {
    /// An unrestricted filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from a list of criteria, applied in order.
    pub fn from_criteria(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        let mut state = Self::new();
        for criterion in criteria {
            state.add_filter(criterion);
        }
        state
    }

    /// Add a selection. Categorical values are inserted into the field's
    /// set; a name overwrites the stored prefix (trimmed, lower-cased).
    ///
    /// Returns `true` if the state changed.
    pub fn add_filter(&mut self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Party(p) => self.party.insert(p),
            Criterion::State(s) => self.state.insert(s),
            Criterion::Rank(r) => self.rank.insert(r),
            Criterion::Gender(g) => self.gender.insert(g),
            Criterion::Name(n) => {
                let lowered = normalize_name(&n);
                let changed = lowered != self.name;
                self.name = lowered;
                changed
            }
        }
    }

    /// Remove a selection. Removing an absent value is a no-op; removing a
    /// name clears the prefix regardless of the value given.
    ///
    /// Returns `true` if the state changed.
    pub fn remove_filter(&mut self, criterion: &Criterion) -> bool {
        match criterion {
            Criterion::Party(p) => self.party.remove(p),
            Criterion::State(s) => self.state.remove(s),
            Criterion::Rank(r) => self.rank.remove(r),
            Criterion::Gender(g) => self.gender.remove(g),
            Criterion::Name(_) => {
                let changed = !self.name.is_empty();
                self.name.clear();
                changed
            }
        }
    }

    /// Whether the selection is currently active.
    pub fn has(&self, criterion: &Criterion) -> bool {
        match criterion {
            Criterion::Party(p) => self.party.contains(p),
            Criterion::State(s) => self.state.contains(s),
            Criterion::Rank(r) => self.rank.contains(r),
            Criterion::Gender(g) => self.gender.contains(g),
            Criterion::Name(n) => !self.name.is_empty() && self.name == normalize_name(n),
        }
    }

    /// Clear every categorical set and the name prefix.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no field imposes a restriction.
    pub fn is_unrestricted(&self) -> bool {
        self.party.is_empty()
            && self.state.is_empty()
            && self.rank.is_empty()
            && self.gender.is_empty()
            && self.name.is_empty()
    }

    pub fn parties(&self) -> &BTreeSet<Party> {
        &self.party
    }

    pub fn states(&self) -> &BTreeSet<StateCode> {
        &self.state
    }

    pub fn ranks(&self) -> &BTreeSet<Rank> {
        &self.rank
    }

    pub fn genders(&self) -> &BTreeSet<Gender> {
        &self.gender
    }

    /// The lower-cased name prefix; empty when unrestricted.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every active categorical selection, in field order. These are the
    /// tags shown above the member list.
    pub fn criteria(&self) -> Vec<Criterion> {
        self.party
            .iter()
            .copied()
            .map(Criterion::Party)
            .chain(self.state.iter().cloned().map(Criterion::State))
            .chain(self.rank.iter().copied().map(Criterion::Rank))
            .chain(self.gender.iter().copied().map(Criterion::Gender))
            .collect()
    }

    /// The inclusion rule for a single record.
    pub fn matches(&self, record: &MemberRecord) -> bool {
        accepts(&self.party, &record.party)
            && accepts(&self.state, &record.state)
            && accepts(&self.rank, &record.rank)
            && accepts(&self.gender, &record.gender)
            && self.matches_name(record)
    }

    fn matches_name(&self, record: &MemberRecord) -> bool {
        self.name.is_empty()
            || record.first_name.to_lowercase().starts_with(&self.name)
            || record.last_name.to_lowercase().starts_with(&self.name)
    }
}

/// An empty accepted set imposes no restriction.
fn accepts<T: Ord>(accepted: &BTreeSet<T>, value: &T) -> bool {
    accepted.is_empty() || accepted.contains(value)
}

/// Apply `state` to `records`, preserving input order. Never fails; the
/// result may be empty.
pub fn filter<'a, I>(records: I, state: &FilterState) -> Vec<&'a MemberRecord>
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    records.into_iter().filter(|r| state.matches(r)).collect()
}

fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Identifiers of the records shown and hidden under `state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub visible: Vec<MemberId>,
    pub hidden: Vec<MemberId>,
}

/// Split `records` into visible and hidden identifiers, both in input order.
pub fn partition_visibility<'a, I>(records: I, state: &FilterState) -> Visibility
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    let mut out = Visibility::default();
    for record in records {
        if state.matches(record) {
            out.visible.push(record.id.clone());
        } else {
            out.hidden.push(record.id.clone());
        }
    }
    out
}
