use std::cmp::Ordering;

use crate::stats::{RankedEntry, RegionMap};

/// Computes each region's growth ratio and orders regions by it, highest first.
///
/// The sort is stable, so regions with equal ratios keep their first-appearance
/// order. `NaN` ratios have no place in a descending order and go last.
pub fn rank(stats: RegionMap) -> Vec<RankedEntry> {
    let mut ranking: Vec<RankedEntry> = stats
        .into_iter()
        .map(|(region, stat)| RankedEntry::new(region, stat))
        .collect();

    ranking.sort_by(|a, b| descending_ratio(a.change(), b.change()));
    ranking
}

fn descending_ratio(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
