//! # Filter Options Catalogue
//!
//! The distinct values of each categorical field present in the data.
//! Computed once from the full roster and used only to populate selection
//! menus.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::filter::FilterField;
use crate::identity::StateCode;
use crate::member::{Gender, MemberRecord, Party, Rank};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub party: BTreeSet<Party>,
    pub state: BTreeSet<StateCode>,
    pub rank: BTreeSet<Rank>,
    pub gender: BTreeSet<Gender>,
}

impl FilterOptions {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a MemberRecord>,
    {
        let mut options = Self::default();
        for r in records {
            options.party.insert(r.party);
            options.state.insert(r.state.clone());
            options.rank.insert(r.rank);
            options.gender.insert(r.gender);
        }
        options
    }

    /// Option labels for `field`, sorted ascending. The name field has no
    /// catalogue and yields an empty list.
    pub fn values(&self, field: FilterField) -> Vec<String> {
        let mut values: Vec<String> = match field {
            FilterField::Party => self.party.iter().map(|p| p.as_str().to_string()).collect(),
            FilterField::State => self.state.iter().map(|s| s.as_str().to_string()).collect(),
            FilterField::Rank => self.rank.iter().map(|r| r.as_str().to_string()).collect(),
            FilterField::Gender => self.gender.iter().map(|g| g.as_str().to_string()).collect(),
            FilterField::Name => Vec::new(),
        };
        values.sort();
        values
    }

    /// Type-ahead search within a field's options: labels starting with
    /// `prefix`, ignoring case. An empty prefix returns every option.
    pub fn search(&self, field: FilterField, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.values(field)
            .into_iter()
            .filter(|v| v.to_lowercase().starts_with(&prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::fixtures::{profile, today};

    fn options() -> FilterOptions {
        let mut a = profile("A", "Jon", "Smith");
        a.state = StateCode::new("NY").unwrap();
        let mut b = profile("B", "Amy", "Doe");
        b.state = StateCode::new("NV").unwrap();
        b.party = Party::Republican;
        let mut c = profile("C", "Al", "Roe");
        c.state = StateCode::new("AL").unwrap();
        c.party = Party::Republican;
        let records = vec![
            MemberRecord::new(a, today()),
            MemberRecord::new(b, today()),
            MemberRecord::new(c, today()),
        ];
        FilterOptions::from_records(&records)
    }

    #[test]
    fn collects_distinct_values() {
        let opts = options();
        assert_eq!(opts.values(FilterField::Party), vec!["democrat", "republican"]);
        assert_eq!(opts.values(FilterField::State), vec!["AL", "NV", "NY"]);
        assert_eq!(opts.values(FilterField::Rank), vec!["junior"]);
        assert!(opts.values(FilterField::Name).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_prefix() {
        let opts = options();
        assert_eq!(opts.search(FilterField::State, "n"), vec!["NV", "NY"]);
        assert_eq!(opts.search(FilterField::Party, "REP"), vec!["republican"]);
        assert_eq!(opts.search(FilterField::State, "").len(), 3);
        assert!(opts.search(FilterField::State, "x").is_empty());
    }

    #[test]
    fn empty_roster_has_empty_catalogue() {
        let opts = FilterOptions::from_records(std::iter::empty());
        assert_eq!(opts, FilterOptions::default());
    }
}
