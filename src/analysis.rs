use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::aggregate::Aggregator;
use crate::rank::rank;
use crate::source::LineSource;
use crate::stats::AnalysisResult;

/// Folds every line from `lines` and ranks the resulting regions.
///
/// Stops at the first read error; nothing is ranked in that case.
pub fn analyze_lines<I>(lines: I) -> Result<AnalysisResult>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut aggregator = Aggregator::new();
    for line in lines {
        aggregator.fold(&line?);
    }

    let counters = aggregator.counters();
    let ranking = rank(aggregator.finalize());
    Ok(AnalysisResult { ranking, counters })
}

pub fn analyze_population_file(path: &Path) -> Result<AnalysisResult> {
    let start_time = Instant::now();
    info!(action = "start", component = "analysis", file_path = ?path, "Starting population analysis");

    let result = analyze_lines(LineSource::open(path)?)?;

    info!(
        action = "complete",
        component = "analysis",
        region_count = result.ranking.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Analysis completed"
    );
    Ok(result)
}
