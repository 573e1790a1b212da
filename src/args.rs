use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "popu-pref.csv";

#[derive(Parser, Debug)]
#[command(
    name = "popurank",
    about = "Rank regions by population growth between 2010 and 2015",
    version,
    long_about = None
)]
pub struct Args {
    /// CSV file with year, region, _, population columns
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Report layout
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Array)]
    pub format: ReportFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Single array-like rendering of all entries
    Array,
    /// One entry per line
    Lines,
}
