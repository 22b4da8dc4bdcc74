use slugify_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Logs go to the state-dir file; stderr only if that is unavailable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("slugify error: {:#}", err);
        std::process::exit(1);
    }
}
