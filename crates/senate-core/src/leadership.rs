//! # Leadership Roster
//!
//! Members holding a leadership title, grouped by party.

use serde::{Deserialize, Serialize};

use crate::member::{MemberRecord, Party};

/// Leaders of one party, in roster order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadershipSection<T> {
    pub party: Party,
    pub leaders: Vec<T>,
}

/// Democrat and Republican sections are always present, possibly empty.
/// An Independent section appears only when an independent holds a title.
pub fn leadership_roster<'a, I>(records: I) -> Vec<LeadershipSection<&'a MemberRecord>>
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    let mut sections: Vec<LeadershipSection<&'a MemberRecord>> = Party::all()
        .iter()
        .map(|&party| LeadershipSection {
            party,
            leaders: Vec::new(),
        })
        .collect();

    for record in records.into_iter().filter(|r| r.is_leader()) {
        if let Some(section) = sections.iter_mut().find(|s| s.party == record.party) {
            section.leaders.push(record);
        }
    }

    sections.retain(|s| s.party != Party::Independent || !s.leaders.is_empty());
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::fixtures::{profile, today};

    fn leader(id: &str, party: Party, title: Option<&str>) -> MemberRecord {
        let mut p = profile(id, "First", "Last");
        p.party = party;
        p.leadership_title = title.map(str::to_string);
        MemberRecord::new(p, today())
    }

    #[test]
    fn groups_leaders_by_party_in_input_order() {
        let records = vec![
            leader("R1", Party::Republican, Some("Minority Leader")),
            leader("D1", Party::Democrat, Some("Majority Leader")),
            leader("D2", Party::Democrat, None),
            leader("D3", Party::Democrat, Some("Majority Whip")),
        ];
        let roster = leadership_roster(&records);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].party, Party::Democrat);
        let dem: Vec<&str> = roster[0].leaders.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(dem, vec!["D1", "D3"]);
        assert_eq!(roster[1].party, Party::Republican);
        assert_eq!(roster[1].leaders.len(), 1);
    }

    #[test]
    fn major_party_sections_present_when_empty() {
        let roster = leadership_roster(std::iter::empty());
        let parties: Vec<Party> = roster.iter().map(|s| s.party).collect();
        assert_eq!(parties, vec![Party::Democrat, Party::Republican]);
        assert!(roster.iter().all(|s| s.leaders.is_empty()));
    }

    #[test]
    fn independent_section_only_with_a_leader() {
        let records = vec![
            leader("I1", Party::Independent, None),
            leader("I2", Party::Independent, Some("Caucus Chair")),
        ];
        let roster = leadership_roster(&records);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[2].party, Party::Independent);
        assert_eq!(roster[2].leaders[0].id.as_str(), "I2");
    }
}
