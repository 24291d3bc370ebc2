use gedmedia_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the log file is unavailable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("gedmedia error: {:#}", err);
        std::process::exit(1);
    }
}
