use chrono::{NaiveDate, NaiveDateTime};
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};

use crate::analysis::stats::{self, BoxStats};
use crate::core::constants::{calendar, stats as consts};
use crate::extraction::LogRecord;

/// Headline numbers shown above the charts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub record_count: usize,
    pub distinct_users: usize,
    pub distinct_actions: usize,
    pub first_seen: Option<NaiveDateTime>,
    pub last_seen: Option<NaiveDateTime>,
}

/// Message length distribution for one hour of the day
#[derive(Debug, Clone, PartialEq)]
pub struct HourGroup {
    pub hour: u32,
    pub count: usize,
    pub stats: BoxStats,
}

/// Weekday x action_type record counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionTable {
    /// Action types, sorted
    pub actions: Vec<String>,
    /// One column per action, one slot per weekday Monday..Sunday
    pub counts: Vec<[usize; 7]>,
}

impl ActionTable {
    pub fn count(&self, weekday: usize, action: &str) -> usize {
        self.actions
            .iter()
            .position(|a| a == action)
            .map_or(0, |i| self.counts[i][weekday])
    }

    pub fn max_count(&self) -> usize {
        self.counts
            .iter()
            .flat_map(|column| column.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Pairwise Pearson correlation of hour and message length
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: [&'static str; 2],
    /// `None` where the coefficient is undefined
    pub cells: [[Option<f64>; 2]; 2],
}

/// Message lengths falling into one of the four hour bins
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodGroup {
    pub label: &'static str,
    pub lengths: Vec<f64>,
    pub stats: Option<BoxStats>,
    /// `(length, density)` outline of the violin, empty when undefined
    pub outline: Vec<(f64, f64)>,
}

/// Every aggregate the dashboard draws, computed from one record set
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub summary: Summary,
    pub length_by_hour: Vec<HourGroup>,
    pub mean_length_by_weekday: [Option<f64>; 7],
    pub action_counts: ActionTable,
    pub correlation: CorrelationMatrix,
    pub daily_counts: Vec<(NaiveDate, usize)>,
    pub length_density: Vec<(f64, f64)>,
    pub length_by_period: Vec<PeriodGroup>,
}

impl Aggregates {
    pub fn from_records(records: &[LogRecord]) -> Self {
        Self {
            summary: summarize(records),
            length_by_hour: length_by_hour(records),
            mean_length_by_weekday: mean_length_by_weekday(records),
            action_counts: action_counts_by_weekday(records),
            correlation: correlation(records),
            daily_counts: daily_counts(records),
            length_density: length_density(records),
            length_by_period: length_by_period(records),
        }
    }
}

fn lengths(records: &[LogRecord]) -> Vec<f64> {
    records.iter().map(|r| r.message_length as f64).collect()
}

pub fn summarize(records: &[LogRecord]) -> Summary {
    let users: FxHashSet<&str> = records.iter().map(|r| r.user.as_str()).collect();
    let actions: FxHashSet<&str> = records.iter().map(|r| r.action_type.as_str()).collect();

    Summary {
        record_count: records.len(),
        distinct_users: users.len(),
        distinct_actions: actions.len(),
        first_seen: records.iter().map(|r| r.timestamp).min(),
        last_seen: records.iter().map(|r| r.timestamp).max(),
    }
}

/// Box statistics per hour present in the data, ordered by hour.
pub fn length_by_hour(records: &[LogRecord]) -> Vec<HourGroup> {
    let mut by_hour: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for record in records {
        by_hour
            .entry(record.hour)
            .or_default()
            .push(record.message_length as f64);
    }

    by_hour
        .into_iter()
        .filter_map(|(hour, values)| {
            let stats = BoxStats::from_values(&values)?;
            Some(HourGroup {
                hour,
                count: values.len(),
                stats,
            })
        })
        .collect()
}

/// Mean message length in Monday..Sunday order, `None` for absent days.
pub fn mean_length_by_weekday(records: &[LogRecord]) -> [Option<f64>; 7] {
    let mut sums = [(0.0_f64, 0_usize); 7];
    for record in records {
        let slot = &mut sums[record.weekday_index()];
        slot.0 += record.message_length as f64;
        slot.1 += 1;
    }
    sums.map(|(sum, n)| (n > 0).then(|| sum / n as f64))
}

pub fn action_counts_by_weekday(records: &[LogRecord]) -> ActionTable {
    let actions: Vec<String> = records
        .iter()
        .map(|r| r.action_type.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect();

    let mut counts = vec![[0_usize; 7]; actions.len()];
    for record in records {
        if let Ok(column) = actions.binary_search(&record.action_type) {
            counts[column][record.weekday_index()] += 1;
        }
    }

    ActionTable { actions, counts }
}

pub fn correlation(records: &[LogRecord]) -> CorrelationMatrix {
    let hours: Vec<f64> = records.iter().map(|r| r.hour as f64).collect();
    let lengths = lengths(records);
    let series = [&hours, &lengths];

    let mut cells = [[None; 2]; 2];
    for (i, a) in series.iter().enumerate() {
        for (j, b) in series.iter().enumerate() {
            cells[i][j] = stats::pearson(a, b);
        }
    }

    CorrelationMatrix {
        labels: ["hour", "log_message_length"],
        cells,
    }
}

/// Records per calendar day from the first to the last observed day,
/// including days without records.
pub fn daily_counts(records: &[LogRecord]) -> Vec<(NaiveDate, usize)> {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *by_day.entry(record.timestamp.date()).or_default() += 1;
    }

    let (Some(&first), Some(&last)) = (by_day.keys().next(), by_day.keys().next_back()) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| (day, by_day.get(&day).copied().unwrap_or(0)))
        .collect()
}

pub fn length_density(records: &[LogRecord]) -> Vec<(f64, f64)> {
    stats::gaussian_kde(
        &lengths(records),
        consts::DENSITY_CUT,
        consts::DENSITY_GRID_SIZE,
    )
}

/// Edges of four equal-width, right-closed bins spanning the hours.
pub fn hour_bin_edges(hours: &[u32]) -> Option<[f64; 5]> {
    let min = f64::from(*hours.iter().min()?);
    let max = f64::from(*hours.iter().max()?);

    if min == max {
        let widen = |v: f64| {
            if v == 0.0 {
                consts::BIN_EDGE_ADJUST
            } else {
                consts::BIN_EDGE_ADJUST * v.abs()
            }
        };
        let (lo, hi) = (min - widen(min), max + widen(max));
        return Some(std::array::from_fn(|i| lo + (hi - lo) * i as f64 / 4.0));
    }

    let mut edges: [f64; 5] = std::array::from_fn(|i| min + (max - min) * i as f64 / 4.0);
    edges[4] = max;
    edges[0] -= (max - min) * consts::BIN_EDGE_ADJUST;
    Some(edges)
}

/// Index of the bin holding `hour`; values past the last edge land in the last bin.
pub fn hour_bin(hour: u32, edges: &[f64; 5]) -> usize {
    let hour = f64::from(hour);
    edges[1..]
        .iter()
        .position(|&edge| hour <= edge)
        .unwrap_or(edges.len() - 2)
}

pub fn length_by_period(records: &[LogRecord]) -> Vec<PeriodGroup> {
    let hours: Vec<u32> = records.iter().map(|r| r.hour).collect();
    let mut buckets: [Vec<f64>; 4] = Default::default();

    if let Some(edges) = hour_bin_edges(&hours) {
        for record in records {
            buckets[hour_bin(record.hour, &edges)].push(record.message_length as f64);
        }
    }

    calendar::PERIODS
        .iter()
        .zip(buckets)
        .map(|(&label, lengths)| PeriodGroup {
            label,
            stats: BoxStats::from_values(&lengths),
            outline: stats::gaussian_kde(&lengths, consts::VIOLIN_CUT, consts::VIOLIN_GRID_SIZE),
            lengths,
        })
        .collect()
}
