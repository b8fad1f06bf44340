//! # Statistics Aggregator
//!
//! Pure summary functions over a member list: party breakdown, gender
//! ratio, average age and the years-in-office histogram.
//!
//! Percentages are truncated, never rounded: one female member out of three
//! reports `33`, not `33.33` or `34`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::member::{Gender, MemberRecord, Party};

/// Member count for one party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyCount {
    pub party: Party,
    pub count: usize,
}

/// Member count and truncated share for one gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderShare {
    pub gender: Gender,
    pub count: usize,
    /// `count * 100 / total`, truncated. Zero for an empty list.
    pub percent: u32,
}

/// One bar of the tenure histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenureBucket {
    pub years: i32,
    pub count: usize,
    /// Bar width relative to the largest bucket, in `[0, 100]`.
    pub width_percent: f64,
}

/// Distribution of members by whole years in office.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenureHistogram {
    /// Ascending by `years`.
    pub buckets: Vec<TenureBucket>,
    pub max_count: usize,
    /// Axis ticks: `[0, max / 2 (truncated), max]`.
    pub axis: [usize; 3],
}

/// The four summaries bundled together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub party_counts: Vec<PartyCount>,
    pub gender: Vec<GenderShare>,
    /// Arithmetic mean of member ages; `None` for an empty list.
    pub average_age: Option<f64>,
    pub tenure: TenureHistogram,
}

impl Statistics {
    /// Average age truncated to a whole number, as displayed.
    pub fn average_age_display(&self) -> Option<i64> {
        self.average_age.map(|mean| mean.trunc() as i64)
    }
}

/// Compute every summary for `records`.
pub fn compute_statistics<'a, I>(records: I) -> Statistics
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    let records: Vec<&MemberRecord> = records.into_iter().collect();
    Statistics {
        total: records.len(),
        party_counts: party_breakdown(records.iter().copied()),
        gender: gender_ratio(records.iter().copied()),
        average_age: average_age(records.iter().copied()),
        tenure: tenure_histogram(records.iter().copied()),
    }
}

/// Count per party, every party included, sorted by count descending.
/// Ties keep the canonical party order.
pub fn party_breakdown<'a, I>(records: I) -> Vec<PartyCount>
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    let mut counts: Vec<PartyCount> = Party::all()
        .iter()
        .map(|&party| PartyCount { party, count: 0 })
        .collect();
    for r in records {
        if let Some(entry) = counts.iter_mut().find(|c| c.party == r.party) {
            entry.count += 1;
        }
    }
    // Stable sort: equal counts stay in Party::all() order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Count and truncated percentage per gender, female first.
pub fn gender_ratio<'a, I>(records: I) -> Vec<GenderShare>
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    let mut counts: BTreeMap<Gender, usize> = BTreeMap::new();
    let mut total = 0usize;
    for r in records {
        *counts.entry(r.gender).or_default() += 1;
        total += 1;
    }
    Gender::all()
        .iter()
        .map(|&gender| {
            let count = counts.get(&gender).copied().unwrap_or(0);
            GenderShare {
                gender,
                count,
                percent: truncated_percent(count, total),
            }
        })
        .collect()
}

/// Mean age, or `None` when there are no records.
pub fn average_age<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    let (sum, n) = records
        .into_iter()
        .fold((0i64, 0usize), |(sum, n), r| (sum + i64::from(r.age), n + 1));
    if n == 0 {
        None
    } else {
        Some(sum as f64 / n as f64)
    }
}

/// Group members by whole years in office and scale each bucket against
/// the largest one.
pub fn tenure_histogram<'a, I>(records: I) -> TenureHistogram
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.years_in_office).or_default() += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(0);
    let buckets = counts
        .into_iter()
        .map(|(years, count)| TenureBucket {
            years,
            count,
            width_percent: relative_width(count, max_count),
        })
        .collect();
    TenureHistogram {
        buckets,
        max_count,
        axis: [0, max_count / 2, max_count],
    }
}

fn truncated_percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer division truncates toward zero.
    (count * 100 / total) as u32
}

fn relative_width(count: usize, max: usize) -> f64 {
    if max == 0 {
        return 0.0;
    }
    if count == max {
        return 100.0;
    }
    count as f64 / max as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::fixtures::{profile, today};
    use chrono::NaiveDate;

    fn member(id: &str, party: Party, gender: Gender, born: i32, started: i32) -> MemberRecord {
        let mut p = profile(id, "First", "Last");
        p.party = party;
        p.gender = gender;
        p.birthday = NaiveDate::from_ymd_opt(born, 1, 1).unwrap();
        p.start_date = NaiveDate::from_ymd_opt(started, 1, 3).unwrap();
        MemberRecord::new(p, today())
    }

    #[test]
    fn party_breakdown_sorted_descending_with_zero_parties() {
        let records = vec![
            member("A", Party::Republican, Gender::Male, 1960, 2010),
            member("B", Party::Republican, Gender::Male, 1960, 2010),
            member("C", Party::Democrat, Gender::Male, 1960, 2010),
        ];
        let counts = party_breakdown(&records);
        assert_eq!(
            counts,
            vec![
                PartyCount { party: Party::Republican, count: 2 },
                PartyCount { party: Party::Democrat, count: 1 },
                PartyCount { party: Party::Independent, count: 0 },
            ]
        );
    }

    #[test]
    fn party_ties_keep_canonical_order() {
        let counts = party_breakdown(std::iter::empty());
        let order: Vec<Party> = counts.iter().map(|c| c.party).collect();
        assert_eq!(order, Party::all().to_vec());
    }

    #[test]
    fn gender_percent_truncates() {
        let records = vec![
            member("A", Party::Democrat, Gender::Female, 1960, 2010),
            member("B", Party::Democrat, Gender::Male, 1960, 2010),
            member("C", Party::Democrat, Gender::Male, 1960, 2010),
        ];
        let ratio = gender_ratio(&records);
        assert_eq!(ratio[0].gender, Gender::Female);
        assert_eq!(ratio[0].count, 1);
        assert_eq!(ratio[0].percent, 33);
        assert_eq!(ratio[1].percent, 66);
    }

    #[test]
    fn gender_ratio_of_empty_list_is_zero() {
        let ratio = gender_ratio(std::iter::empty());
        assert!(ratio.iter().all(|g| g.count == 0 && g.percent == 0));
    }

    #[test]
    fn average_age_truncates_for_display() {
        // Ages 64, 63, 63 -> mean 63.33..
        let records = vec![
            member("A", Party::Democrat, Gender::Male, 1960, 2010),
            member("B", Party::Democrat, Gender::Male, 1961, 2010),
            member("C", Party::Democrat, Gender::Male, 1961, 2010),
        ];
        let stats = compute_statistics(&records);
        let mean = stats.average_age.unwrap();
        assert!((mean - 63.333).abs() < 0.01);
        assert_eq!(stats.average_age_display(), Some(63));
    }

    #[test]
    fn average_age_of_empty_list_is_none() {
        assert_eq!(average_age(std::iter::empty()), None);
        assert_eq!(compute_statistics(std::iter::empty()).average_age_display(), None);
    }

    #[test]
    fn tenure_histogram_scales_against_max_bucket() {
        // Tenures: 14, 14, 4, 1
        let records = vec![
            member("A", Party::Democrat, Gender::Male, 1960, 2010),
            member("B", Party::Democrat, Gender::Male, 1960, 2010),
            member("C", Party::Democrat, Gender::Male, 1960, 2020),
            member("D", Party::Democrat, Gender::Male, 1960, 2023),
        ];
        let hist = tenure_histogram(&records);
        let years: Vec<i32> = hist.buckets.iter().map(|b| b.years).collect();
        assert_eq!(years, vec![1, 4, 14]);
        assert_eq!(hist.max_count, 2);
        assert_eq!(hist.axis, [0, 1, 2]);
        assert_eq!(hist.buckets[2].width_percent, 100.0);
        assert_eq!(hist.buckets[0].width_percent, 50.0);
        assert!(hist
            .buckets
            .iter()
            .all(|b| (0.0..=100.0).contains(&b.width_percent)));
    }

    #[test]
    fn single_bucket_renders_full_width() {
        let records = vec![member("A", Party::Democrat, Gender::Male, 1960, 2010)];
        let hist = tenure_histogram(&records);
        assert_eq!(hist.buckets.len(), 1);
        assert_eq!(hist.buckets[0].width_percent, 100.0);
        assert_eq!(hist.axis, [0, 0, 1]);
    }

    #[test]
    fn empty_histogram_has_no_buckets() {
        let hist = tenure_histogram(std::iter::empty());
        assert!(hist.buckets.is_empty());
        assert_eq!(hist.max_count, 0);
    }
}
