use indexmap::IndexMap;

use crate::record::Population;

/// Per-region aggregate, keyed by region name in a [`RegionMap`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionStat {
    pub popu10: Population,
    pub popu15: Population,
    /// Growth ratio `popu15 / popu10`, filled in by the ranker.
    pub change: Option<f64>,
}

impl RegionStat {
    pub fn growth_ratio(&self) -> f64 {
        self.popu15.as_f64() / self.popu10.as_f64()
    }
}

/// Region aggregates in order of first appearance.
pub type RegionMap = IndexMap<String, RegionStat>;

/// A region paired with its computed growth ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub region: String,
    pub stat: RegionStat,
    change: f64,
}

impl RankedEntry {
    /// Computes the growth ratio and stores it in `stat.change`.
    pub fn new(region: String, mut stat: RegionStat) -> Self {
        let change = stat.growth_ratio();
        stat.change = Some(change);
        RankedEntry {
            region,
            stat,
            change,
        }
    }

    pub fn change(&self) -> f64 {
        self.change
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldCounters {
    pub lines_seen: u64,
    pub lines_folded: u64,
    pub lines_ignored: u64,
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub ranking: Vec<RankedEntry>,
    pub counters: FoldCounters,
}
