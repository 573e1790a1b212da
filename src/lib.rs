pub mod aggregate;
pub mod analysis;
pub mod args;
pub mod rank;
pub mod record;
pub mod report;
pub mod source;
pub mod stats;
pub mod utils;

pub use aggregate::Aggregator;
pub use analysis::{analyze_lines, analyze_population_file};
pub use args::{Args, ReportFormat};
pub use rank::rank;
pub use report::{print_report, render};
pub use stats::{AnalysisResult, RankedEntry, RegionMap, RegionStat};
