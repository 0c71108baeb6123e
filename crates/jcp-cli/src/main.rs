use jcp_core::error::ResolveError;
use jcp_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("jcp error: {:#}", err);
        // Resolution failures carry their own exit contract; connectivity
        // problems additionally print a remediation hint.
        if let Some(resolve_err) = err.downcast_ref::<ResolveError>() {
            if let Some(hint) = resolve_err.remediation() {
                eprintln!("{hint}");
            }
            std::process::exit(resolve_err.exit_code());
        }
        std::process::exit(1);
    }
}
