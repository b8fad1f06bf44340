//! Filter flags shared by `members` and `stats`.

use anyhow::{Context, Result};
use clap::Args;

use senate_core::{Criterion, FilterField, FilterState};

/// Restriction flags. Categorical flags repeat or take comma-separated
/// values; values within a field are alternatives.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Party (democrat, republican, independent).
    #[arg(long, value_delimiter = ',')]
    pub party: Vec<String>,

    /// Two-letter state code.
    #[arg(long, value_delimiter = ',')]
    pub state: Vec<String>,

    /// Seniority (junior, senior).
    #[arg(long, value_delimiter = ',')]
    pub rank: Vec<String>,

    /// Gender (female, male).
    #[arg(long, value_delimiter = ',')]
    pub gender: Vec<String>,

    /// Case-insensitive prefix of the first or last name.
    #[arg(long)]
    pub name: Option<String>,
}

impl FilterArgs {
    /// True when no flag was given.
    pub fn is_empty(&self) -> bool {
        self.party.is_empty()
            && self.state.is_empty()
            && self.rank.is_empty()
            && self.gender.is_empty()
            && self.name.as_deref().map_or(true, str::is_empty)
    }

    /// Build the filter state, rejecting values outside a field's domain.
    pub fn to_filter_state(&self) -> Result<FilterState> {
        let mut state = FilterState::new();
        let lists = [
            (FilterField::Party, &self.party),
            (FilterField::State, &self.state),
            (FilterField::Rank, &self.rank),
            (FilterField::Gender, &self.gender),
        ];
        for (field, values) in lists {
            for raw in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
                let criterion = Criterion::parse(field, raw)
                    .with_context(|| format!("invalid --{field} value"))?;
                state.add_filter(criterion);
            }
        }
        if let Some(name) = &self.name {
            state.add_filter(Criterion::Name(name.clone()));
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use senate_core::Party;

    #[test]
    fn empty_args_are_unrestricted() {
        let args = FilterArgs::default();
        assert!(args.is_empty());
        assert!(args.to_filter_state().unwrap().is_unrestricted());
    }

    #[test]
    fn values_become_criteria() {
        let args = FilterArgs {
            party: vec!["Democrat".into(), "independent".into()],
            state: vec!["ny".into()],
            name: Some("Sch".into()),
            ..FilterArgs::default()
        };
        let state = args.to_filter_state().unwrap();
        assert!(state.parties().contains(&Party::Democrat));
        assert!(state.parties().contains(&Party::Independent));
        assert_eq!(state.states().len(), 1);
        assert_eq!(state.name(), "sch");
    }

    #[test]
    fn blank_name_is_empty() {
        let args = FilterArgs {
            name: Some(String::new()),
            ..FilterArgs::default()
        };
        assert!(args.is_empty());
    }

    #[test]
    fn out_of_domain_value_is_rejected() {
        let args = FilterArgs {
            rank: vec!["emeritus".into()],
            ..FilterArgs::default()
        };
        let err = args.to_filter_state().unwrap_err();
        assert!(format!("{err:#}").contains("invalid --rank value"));
    }
}
