//! `senate leaders`: members holding a leadership title, grouped by party.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use senate_core::{capitalize_first, Roster};

use crate::{render_json, OutputFormat};

/// `senate leaders` arguments.
#[derive(Args, Debug, Default)]
pub struct LeadersArgs {}

#[derive(Debug, Serialize)]
struct LeaderEntry<'a> {
    id: &'a str,
    name: String,
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct Section<'a> {
    party: &'static str,
    leaders: Vec<LeaderEntry<'a>>,
}

/// Execute `senate leaders`.
pub fn run_leaders(_args: &LeadersArgs, roster: &Roster, format: OutputFormat) -> Result<u8> {
    print!("{}", render_leaders(roster, format)?);
    Ok(0)
}

pub fn render_leaders(roster: &Roster, format: OutputFormat) -> Result<String> {
    let sections: Vec<Section<'_>> = roster
        .leadership()
        .into_iter()
        .map(|s| Section {
            party: s.party.as_str(),
            leaders: s
                .leaders
                .into_iter()
                .map(|r| LeaderEntry {
                    id: r.id.as_str(),
                    name: r.display_name(),
                    title: r.leadership_title.as_deref().unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    if format == OutputFormat::Json {
        return Ok(format!("{}\n", render_json(&sections)?));
    }
    let mut out = String::new();
    for section in &sections {
        out.push_str(&capitalize_first(section.party));
        out.push('\n');
        if section.leaders.is_empty() {
            out.push_str("  (none)\n");
        }
        for leader in &section.leaders {
            out.push_str(&format!("  {}: {}\n", leader.title, leader.name));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::roster;

    #[test]
    fn leaders_grouped_under_party_headings() {
        let out = render_leaders(&roster(), OutputFormat::Table).unwrap();
        assert_eq!(
            out,
            "Democrat\n  Majority Leader: Charles \"Chuck\" Schumer\nRepublican\n  Minority Leader: Mitch McConnell\n"
        );
    }

    #[test]
    fn json_sections_name_the_party() {
        let out = render_leaders(&roster(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[1]["party"], "republican");
        assert_eq!(value[1]["leaders"][0]["id"], "M000355");
    }
}
