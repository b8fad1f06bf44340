//! # Member commands
//!
//! `senate members` lists the members that pass the filter flags in roster
//! order. `senate show <ID>` prints one member's profile.

use anyhow::Result;
use clap::Args;

use senate_core::{capitalize_first, FilterState, MemberRecord, Roster};

use crate::filter_args::FilterArgs;
use crate::{render_json, render_table, OutputFormat};

/// `senate members` arguments.
#[derive(Args, Debug)]
pub struct MembersArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// `senate show` arguments.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Member identifier, e.g. S000148.
    pub id: String,
}

/// Execute `senate members`.
pub fn run_members(args: &MembersArgs, roster: &Roster, format: OutputFormat) -> Result<u8> {
    let filter = args.filter.to_filter_state()?;
    print!("{}", render_members(roster, &filter, format)?);
    Ok(0)
}

/// Execute `senate show`. Exits with 1 for an unknown identifier.
pub fn run_show(args: &ShowArgs, roster: &Roster, format: OutputFormat) -> Result<u8> {
    match roster.get(&args.id) {
        Some(record) => {
            print!("{}", render_profile(record, format)?);
            Ok(0)
        }
        None => {
            eprintln!("No member with id {}", args.id);
            Ok(1)
        }
    }
}

pub fn render_members(roster: &Roster, filter: &FilterState, format: OutputFormat) -> Result<String> {
    let members = roster.filter(filter);
    if format == OutputFormat::Json {
        return Ok(format!("{}\n", render_json(&members)?));
    }

    let rows: Vec<Vec<String>> = members
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.display_name(),
                capitalize_first(r.party.as_str()),
                r.state.to_string(),
                capitalize_first(r.rank.as_str()),
                r.age.to_string(),
                r.years_in_office.to_string(),
            ]
        })
        .collect();
    let mut out = render_table(
        &["ID", "NAME", "PARTY", "STATE", "RANK", "AGE", "YEARS"],
        &rows,
    );
    if members.is_empty() {
        out.push_str("No matching members.\n");
    } else {
        out.push_str(&format!("\n{} of {} members\n", members.len(), roster.len()));
    }
    Ok(out)
}

pub fn render_profile(record: &MemberRecord, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(format!("{}\n", render_json(record)?));
    }

    let mut lines = vec![
        record.popup_name(),
        format!(
            "{} {}, {}",
            capitalize_first(record.rank.as_str()),
            capitalize_first(record.party.as_str()),
            record.state
        ),
    ];
    if let Some(title) = &record.leadership_title {
        lines.push(title.clone());
    }
    lines.push(format!("Age: {}", record.age));
    lines.push(format!(
        "In office since {} ({} years)",
        record.start_date, record.years_in_office
    ));
    let optional = [
        ("Office", record.office.clone()),
        ("Website", record.website.clone()),
        ("Twitter", record.twitter_url()),
        ("YouTube", record.youtube_url()),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            lines.push(format!("{label}: {value}"));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
