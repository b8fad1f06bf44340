//! `senate stats`: party breakdown, gender ratio, average age and the
//! tenure histogram. Filter flags restrict the members the aggregates are
//! computed over.

use anyhow::Result;
use clap::Args;

use senate_core::{capitalize_first, FilterState, Roster, Statistics};

use crate::filter_args::FilterArgs;
use crate::{render_json, render_table, OutputFormat};

/// Width of a full histogram bar, in characters.
const BAR_WIDTH: f64 = 40.0;

/// `senate stats` arguments.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Execute `senate stats`.
pub fn run_stats(args: &StatsArgs, roster: &Roster, format: OutputFormat) -> Result<u8> {
    let filter = args.filter.to_filter_state()?;
    if !args.filter.is_empty() {
        tracing::info!(criteria = filter.criteria().len(), "computing filtered statistics");
    }
    let stats = roster.statistics(&filter);
    print!("{}", render_stats(&stats, &filter, format)?);
    Ok(0)
}

pub fn render_stats(stats: &Statistics, filter: &FilterState, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(format!("{}\n", render_json(stats)?));
    }

    let scope = if filter.is_unrestricted() {
        "all members"
    } else {
        "filtered members"
    };
    let mut out = format!("{} {scope}\n\n", stats.total);

    let party_rows: Vec<Vec<String>> = stats
        .party_counts
        .iter()
        .map(|p| vec![capitalize_first(p.party.as_str()), p.count.to_string()])
        .collect();
    out.push_str(&render_table(&["PARTY", "COUNT"], &party_rows));
    out.push('\n');

    let gender_rows: Vec<Vec<String>> = stats
        .gender
        .iter()
        .map(|g| {
            vec![
                capitalize_first(g.gender.as_str()),
                g.count.to_string(),
                format!("{}%", g.percent),
            ]
        })
        .collect();
    out.push_str(&render_table(&["GENDER", "COUNT", "SHARE"], &gender_rows));
    out.push('\n');

    match stats.average_age_display() {
        Some(age) => out.push_str(&format!("Average age: {age}\n\n")),
        None => out.push_str("Average age: n/a\n\n"),
    }

    out.push_str("Years in office\n");
    for b in &stats.tenure.buckets {
        let bar = "#".repeat((b.width_percent / 100.0 * BAR_WIDTH).round() as usize);
        out.push_str(&format!("{:>3} | {bar} {}\n", b.years, b.count));
    }
    let [low, mid, high] = stats.tenure.axis;
    out.push_str(&format!("axis: {low} / {mid} / {high}\n"));
    Ok(out)
}
