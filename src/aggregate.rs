use tracing::{debug, info};

use crate::record::RawRecord;
use crate::stats::{FoldCounters, RegionMap};

pub const BASE_YEAR: i64 = 2010;
pub const TARGET_YEAR: i64 = 2015;

/// Folds CSV lines into per-region population figures for the two reference years.
#[derive(Debug, Default)]
pub struct Aggregator {
    regions: RegionMap,
    counters: FoldCounters,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, line: &str) {
        self.counters.lines_seen += 1;
        let record = RawRecord::parse(line);

        let year = match record.year {
            Some(year) if year == BASE_YEAR || year == TARGET_YEAR => year,
            _ => {
                self.counters.lines_ignored += 1;
                debug!(action = "skip", component = "aggregator", line_number = self.counters.lines_seen, year = ?record.year, "Line outside reference years");
                return;
            }
        };

        let stat = self.regions.entry(record.region.to_string()).or_default();
        if year == BASE_YEAR {
            stat.popu10 = record.population;
        }
        if year == TARGET_YEAR {
            stat.popu15 = record.population;
        }
        self.counters.lines_folded += 1;
    }

    pub fn counters(&self) -> FoldCounters {
        self.counters
    }

    pub fn finalize(self) -> RegionMap {
        info!(
            action = "complete",
            component = "aggregator",
            lines_seen = self.counters.lines_seen,
            lines_folded = self.counters.lines_folded,
            lines_ignored = self.counters.lines_ignored,
            region_count = self.regions.len(),
            "Aggregation finished"
        );
        self.regions
    }
}
