//! libarch differential-test CLI
//!
//! Entry point for the difftest runner. Parses CLI arguments and
//! delegates to `difftest::execute`.

use clap::Parser;
use difftest::logging::init_logging;
use difftest::{execute, Cli, DifftestError};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config = cli.into_config();
    match execute(&config) {
        Ok(_) => {}
        Err(DifftestError::Json(e)) => {
            eprintln!("Error: could not serialize report: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
