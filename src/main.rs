//! Colorado Plateau Water Analysis - Diagnostic Harness
//!
//! Run this before the analysis notebook to check that:
//! 1. The table, HTTP, and map capabilities work
//! 2. The USGS site service answers for a small test area
//! 3. The sample station data builds and filters as expected
//!
//! Usage:
//!   cargo run --release
//!
//! Takes no arguments and always exits 0; read the console output for
//! the result of each check.

use plateau_probe::config::{self, ProbeConfig};
use plateau_probe::console::Console;
use plateau_probe::harness::Harness;
use plateau_probe::ingest::usgs::ReqwestTransport;
use plateau_probe::logging::{self, Stage};

fn main() {
    let config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            // Logger isn't configured yet; install defaults so this warning shows.
            let defaults = ProbeConfig::default();
            logging::init_logger(defaults.logging.min_level(), defaults.logging.console_timestamps);
            logging::warn(Stage::System, None, &format!("{} (using built-in defaults)", e));
            defaults
        }
    };

    logging::init_logger(config.logging.min_level(), config.logging.console_timestamps);

    let transport = ReqwestTransport;
    let harness = Harness::with_defaults(config, &transport);
    let mut console = Console::stdout();

    harness.run(&mut console);
}
