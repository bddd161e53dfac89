//! csv-to-oscal - build the OSCAL controls catalog from its CSV source
//!
//! ```bash
//! csv-to-oscal                                   # controls/controls_catalog.csv -> controls/controls_catalog.json
//! csv-to-oscal --input in.csv --output out.json
//! ```

use clap::Parser;
use control_catalog::{logs, run, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv-to-oscal", version)]
#[command(about = "Convert the security controls CSV into an OSCAL catalog", long_about = None)]
struct Cli {
    /// Input CSV file [default: controls/controls_catalog.csv]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON file, overwritten if present [default: controls/controls_catalog.json]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logs::init_logging();

    // Progress and the final summary come from the pipeline's own log lines.
    if let Err(e) = execute(cli) {
        logs::log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_args(cli.input, cli.output)?;
    run(&config)?;
    Ok(())
}
