use anyhow::Result;
use clap::Parser;
use tracing::error;

use popurank::{analyze_population_file, print_report, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match analyze_population_file(&args.input) {
        Ok(result) => {
            print_report(&result.ranking, args.format);
            Ok(())
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
