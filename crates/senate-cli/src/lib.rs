//! # senate-cli: Command-Line Presentation of the Senate Roster
//!
//! Provides the `senate` command-line interface. Every subcommand loads the
//! roster once through `senate-source`, applies the pure transforms from
//! `senate-core` and prints either an aligned text table or JSON.
//!
//! ## Subcommands
//!
//! - `senate members`: Member list, filtered by party, state, rank, gender
//!   and name prefix.
//! - `senate show`: One member's profile.
//! - `senate options`: Filter option catalogue with type-ahead search.
//! - `senate stats`: Party breakdown, gender ratio, average age and tenure.
//! - `senate leaders`: Leadership roster grouped by party.
//! - `senate seating`: Seating chart coordinates.
//!
//! ```bash
//! senate members --party democrat --state NY,VT
//! senate stats --gender female
//! senate --json seating --group-size 25
//! ```

pub mod filter_args;
pub mod leaders;
pub mod members;
pub mod options;
pub mod seating;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use senate_core::Roster;
use senate_source::SourceConfig;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Resolve the source configuration and load the roster, dated today.
///
/// The returned config carries the seating parameters from the YAML file.
pub fn load(config_path: Option<&Path>) -> Result<(Roster, SourceConfig)> {
    let config = SourceConfig::load(config_path).context("invalid source configuration")?;
    tracing::debug!(
        members = %config.members,
        images = %config.images,
        "resolved roster sources"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let today = chrono::Local::now().date_naive();
    let roster = runtime
        .block_on(senate_source::load_roster(config.clone(), today))
        .context("failed to load roster")?;
    Ok((roster, config))
}

/// Pretty-print `value` as JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

/// Left-align `rows` under `headers`, two spaces between columns.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(headers.to_vec());
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::NaiveDate;
    use senate_core::{Gender, MemberId, MemberProfile, Party, Rank, Roster, StateCode};

    pub fn profile(id: &str, first: &str, last: &str, party: Party, state: &str) -> MemberProfile {
        MemberProfile {
            id: MemberId::new(id).unwrap(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            nickname: None,
            party,
            state: StateCode::new(state).unwrap(),
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

    pub fn roster() -> Roster {
        let mut schumer = profile("S000148", "Charles", "Schumer", Party::Democrat, "NY");
        schumer.nickname = Some("Chuck".into());
        schumer.rank = Rank::Senior;
        schumer.leadership_title = Some("Majority Leader".into());
        schumer.office = Some("322 Hart Senate Office Building".into());

        let mut klobuchar = profile("K000367", "Amy", "Klobuchar", Party::Democrat, "MN");
        klobuchar.gender = Gender::Female;
        klobuchar.start_date = NaiveDate::from_ymd_opt(2019, 1, 3).unwrap();

        let mut mcconnell = profile("M000355", "Mitch", "McConnell", Party::Republican, "KY");
        mcconnell.leadership_title = Some("Minority Leader".into());

        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        Roster::from_profiles(vec![schumer, klobuchar, mcconnell], today).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_columns_align_to_widest_cell() {
        let out = render_table(
            &["ID", "NAME"],
            &[
                vec!["A1".into(), "Amy".into()],
                vec!["LONGER".into(), "Bo".into()],
            ],
        );
        assert_eq!(out, "ID      NAME\nA1      Amy\nLONGER  Bo\n");
    }

    #[test]
    fn table_without_rows_prints_header() {
        assert_eq!(render_table(&["A", "B"], &[]), "A  B\n");
    }

    #[test]
    fn json_flag_selects_format() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Table);
    }

    #[test]
    fn load_reports_missing_sources() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("senate.yaml");
        std::fs::write(
            &config,
            format!(
                "members: {}\nimages: {}\n",
                dir.path().join("missing.json").display(),
                dir.path().join("images.json").display()
            ),
        )
        .unwrap();
        let err = load(Some(&config)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load roster"));
    }
}
