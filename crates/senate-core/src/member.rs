//! # Member Record
//!
//! Normalized, in-memory representation of one senator. Records are built
//! once per load from a [`MemberProfile`] and a reference date; the derived
//! `age` and `years_in_office` values are fixed at that moment and are not
//! re-derived for the lifetime of the record.
//!
//! The three categorical enums ([`Party`], [`Rank`], [`Gender`]) are the
//! single definition of each domain. Every `match` on them is exhaustive.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::identity::{MemberId, StateCode};

/// Party affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Democrat,
    Republican,
    Independent,
}

impl Party {
    /// All parties in canonical order.
    pub fn all() -> &'static [Party] {
        &[Self::Democrat, Self::Republican, Self::Independent]
    }

    /// Lower-case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Democrat => "democrat",
            Self::Republican => "republican",
            Self::Independent => "independent",
        }
    }

    /// Seat color used by the seating chart.
    pub fn seat_color(&self) -> &'static str {
        match self {
            Self::Democrat => "blue",
            Self::Republican => "red",
            Self::Independent => "gray",
        }
    }
}

/// Seniority within the state delegation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Junior,
    Senior,
}

impl Rank {
    /// All ranks in canonical order.
    pub fn all() -> &'static [Rank] {
        &[Self::Junior, Self::Senior]
    }

    /// Lower-case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Senior => "senior",
        }
    }
}

/// Gender as recorded in the source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// All genders in the order the statistics report them.
    pub fn all() -> &'static [Gender] {
        &[Self::Female, Self::Male]
    }

    /// Lower-case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

macro_rules! categorical_text {
    ($ty:ident, $field:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            /// Parse from the identifier, ignoring ASCII case and surrounding
            /// whitespace (the source dataset capitalizes party names).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $ty::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ValidationError::invalid($field, s))
            }
        }
    };
}

categorical_text!(Party, "party");
categorical_text!(Rank, "rank");
categorical_text!(Gender, "gender");

/// Source-independent description of a member, before derived values are
/// computed. Produced by the loader; consumed by [`MemberRecord::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub party: Party,
    pub state: StateCode,
    pub rank: Rank,
    pub gender: Gender,
    pub birthday: NaiveDate,
    pub start_date: NaiveDate,
    pub office: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub website: Option<String>,
    pub leadership_title: Option<String>,
    pub image_url: Option<String>,
}

/// One legislator, with age and tenure derived against a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub party: Party,
    pub state: StateCode,
    pub rank: Rank,
    pub gender: Gender,
    pub birthday: NaiveDate,
    pub start_date: NaiveDate,
    /// Calendar years between `birthday` and the reference date.
    pub age: i32,
    /// Calendar years between `start_date` and the reference date.
    pub years_in_office: i32,
    pub office: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub website: Option<String>,
    /// Present only for members of the leadership.
    pub leadership_title: Option<String>,
    pub image_url: Option<String>,
}

impl MemberRecord {
    /// Build a record, deriving age and tenure relative to `today`.
    ///
    /// Both values are calendar-year differences (`today.year() - year`),
    /// so they can be negative for dates after `today`.
    pub fn new(profile: MemberProfile, today: NaiveDate) -> Self {
        let age = years_between(profile.birthday, today);
        let years_in_office = years_between(profile.start_date, today);
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            nickname: profile.nickname,
            party: profile.party,
            state: profile.state,
            rank: profile.rank,
            gender: profile.gender,
            birthday: profile.birthday,
            start_date: profile.start_date,
            age,
            years_in_office,
            office: profile.office,
            twitter: profile.twitter,
            youtube: profile.youtube,
            website: profile.website,
            leadership_title: profile.leadership_title,
            image_url: profile.image_url,
        }
    }

    /// Whether the member holds a leadership title.
    pub fn is_leader(&self) -> bool {
        self.leadership_title.is_some()
    }

    /// `First Last`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `First "Nick" Last`, as shown in the leadership roster.
    pub fn display_name(&self) -> String {
        match &self.nickname {
            Some(nick) => format!("{} \"{}\" {}", self.first_name, nick, self.last_name),
            None => self.full_name(),
        }
    }

    /// `First (Nick) Last`, as shown on the profile pop-up.
    pub fn popup_name(&self) -> String {
        match &self.nickname {
            Some(nick) => format!("{} ({}) {}", self.first_name, nick, self.last_name),
            None => self.full_name(),
        }
    }

    /// Link to the member's Twitter profile, if a handle is known.
    pub fn twitter_url(&self) -> Option<String> {
        self.twitter
            .as_deref()
            .map(|handle| format!("https://www.twitter.com/{handle}"))
    }

    /// Link to the member's YouTube channel, if a handle is known.
    pub fn youtube_url(&self) -> Option<String> {
        self.youtube
            .as_deref()
            .map(|handle| format!("https://www.youtube.com/{handle}"))
    }
}

/// Calendar-year difference between `from` and `today`.
pub fn years_between(from: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - from.year()
}

/// Upper-case the first character of a label (`democrat` -> `Democrat`).
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal profile with every optional field absent.
    pub fn profile(id: &str, first: &str, last: &str) -> MemberProfile {
        MemberProfile {
            id: MemberId::new(id).unwrap(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            nickname: None,
            party: Party::Democrat,
            state: StateCode::new("NY").unwrap(),
            rank: Rank::Junior,
            gender: Gender::Male,
            birthday: NaiveDate::from_ymd_opt(1960, 6, 1).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2010, 1, 3).unwrap(),
            office: None,
            twitter: None,
            youtube: None,
            website: None,
            leadership_title: None,
            image_url: None,
        }
    }

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    pub fn record(id: &str, first: &str, last: &str) -> MemberRecord {
        MemberRecord::new(profile(id, first, last), today())
    }
}
