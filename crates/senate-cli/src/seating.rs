//! `senate seating`: seat coordinates for the whole roster in load order.

use std::num::NonZeroUsize;

use anyhow::Result;
use clap::Args;

use senate_core::{Roster, SeatingLayout, SeatingParams};

use crate::{render_json, render_table, OutputFormat};

/// `senate seating` arguments.
#[derive(Args, Debug)]
pub struct SeatingArgs {
    /// Members per arc. Overrides the configured group size.
    #[arg(long)]
    pub group_size: Option<NonZeroUsize>,
}

impl SeatingArgs {
    /// Configured parameters with the command-line override applied.
    pub fn params(&self, configured: SeatingParams) -> SeatingParams {
        match self.group_size {
            Some(group_size) => SeatingParams {
                group_size,
                ..configured
            },
            None => configured,
        }
    }
}

/// Execute `senate seating`.
pub fn run_seating(
    args: &SeatingArgs,
    roster: &Roster,
    configured: SeatingParams,
    format: OutputFormat,
) -> Result<u8> {
    let params = args.params(configured);
    tracing::debug!(group_size = params.group_size.get(), "computing seating layout");
    let layout = roster.seating(&params);
    print!("{}", render_seating(&layout, format)?);
    Ok(0)
}

pub fn render_seating(layout: &SeatingLayout, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(format!("{}\n", render_json(layout)?));
    }
    let rows: Vec<Vec<String>> = layout
        .groups
        .iter()
        .flat_map(|g| {
            g.seats.iter().map(move |s| {
                vec![
                    g.index.to_string(),
                    s.member_id.to_string(),
                    s.color().to_string(),
                    format!("{:.1}", s.x),
                    format!("{:.1}", s.y),
                ]
            })
        })
        .collect();
    let mut out = render_table(&["GROUP", "MEMBER", "COLOR", "X", "Y"], &rows);
    out.push_str(&format!(
        "\n{} seats in {} groups\n",
        layout.len(),
        layout.groups.len()
    ));
    Ok(out)
}
