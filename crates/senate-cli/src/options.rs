//! `senate options`: the filter option catalogue, optionally narrowed to
//! one field and a type-ahead prefix.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use senate_core::{FilterField, Roster};

use crate::{render_json, OutputFormat};

/// `senate options` arguments.
#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Restrict to one field (party, state, rank, gender).
    #[arg(long)]
    pub field: Option<String>,

    /// Case-insensitive prefix of the option labels.
    #[arg(long, default_value = "")]
    pub prefix: String,
}

#[derive(Debug, Serialize)]
struct FieldOptions {
    field: FilterField,
    values: Vec<String>,
}

/// Execute `senate options`.
pub fn run_options(args: &OptionsArgs, roster: &Roster, format: OutputFormat) -> Result<u8> {
    print!("{}", render_options(args, roster, format)?);
    Ok(0)
}

pub fn render_options(args: &OptionsArgs, roster: &Roster, format: OutputFormat) -> Result<String> {
    let fields: Vec<FilterField> = match &args.field {
        Some(raw) => {
            let field: FilterField = raw.parse().context("invalid --field")?;
            if !field.is_categorical() {
                bail!("field {field} has no option list");
            }
            vec![field]
        }
        None => FilterField::categorical().to_vec(),
    };

    let options: Vec<FieldOptions> = fields
        .into_iter()
        .map(|field| FieldOptions {
            field,
            values: roster.options().search(field, &args.prefix),
        })
        .collect();

    if format == OutputFormat::Json {
        return Ok(format!("{}\n", render_json(&options)?));
    }
    let mut out = String::new();
    for o in &options {
        out.push_str(&format!("{}: {}\n", o.field, o.values.join(", ")));
    }
    Ok(out)
}
