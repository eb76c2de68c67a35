//! Error handling and display for the CLI.

use colored::Colorize;
use coursehub_id::IdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid codec configuration: {0}")]
    Config(#[source] IdError),

    #[error("{failed} of {total} inputs could not be decoded")]
    Rejected { failed: usize, total: usize },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Config(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Check CRID_PREFIX / CRID_OFFSET / CRID_MIN_WIDTH and `crid config show`."
                        .yellow()
                );
            }
            CliError::Rejected { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Use `crid decode --legacy` to see what the web front-end would return."
                        .yellow()
                );
            }
            CliError::Other(_) => {}
        }
    }
}
