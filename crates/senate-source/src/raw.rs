//! # Source Schema
//!
//! Serde mirror of the two input documents and their normalization into
//! [`MemberProfile`]s.
//!
//! The member document is an `objects` array of term records, each with a
//! nested `person`. Empty strings in optional fields are treated as absent.
//! Unknown fields are ignored.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use senate_core::{MemberId, MemberProfile, StateCode, ValidationError};

use crate::error::SourceError;

/// Image lookup table: bioguide id to image URL.
pub type ImageTable = HashMap<String, String>;

#[derive(Debug, Clone, Deserialize)]
pub struct RawMemberFile {
    pub objects: Vec<RawMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    pub person: RawPerson,
    pub party: String,
    pub state: String,
    pub senator_rank: String,
    #[serde(default)]
    pub extra: Option<RawExtra>,
    pub startdate: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub leadership_title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPerson {
    pub bioguideid: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub nickname: Option<String>,
    pub gender: String,
    pub birthday: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub twitterid: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub youtubeid: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExtra {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub office: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

impl RawMember {
    /// Validate and convert one record, resolving its image through `images`.
    pub fn into_profile(self, images: &ImageTable) -> Result<MemberProfile, ValidationError> {
        let id = MemberId::new(self.person.bioguideid)?;
        let image_url = images
            .get(id.as_str())
            .filter(|url| !url.trim().is_empty())
            .cloned();
        Ok(MemberProfile {
            first_name: self.person.firstname,
            last_name: self.person.lastname,
            nickname: self.person.nickname,
            party: self.party.parse()?,
            state: StateCode::new(&self.state)?,
            rank: self.senator_rank.parse()?,
            gender: self.person.gender.parse()?,
            birthday: parse_date("birthday", &self.person.birthday)?,
            start_date: parse_date("startdate", &self.startdate)?,
            office: self.extra.and_then(|e| e.office),
            twitter: self.person.twitterid,
            youtube: self.person.youtubeid,
            website: self.website,
            leadership_title: self.leadership_title,
            image_url,
            id,
        })
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid(field, raw))
}

/// Normalize every record in document order. The first invalid record
/// aborts the whole load.
pub fn normalize(file: RawMemberFile, images: &ImageTable) -> Result<Vec<MemberProfile>, SourceError> {
    file.objects
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let id = raw.person.bioguideid.clone();
            raw.into_profile(images)
                .map_err(|source| SourceError::Normalize { index, id, source })
        })
        .collect()
}
