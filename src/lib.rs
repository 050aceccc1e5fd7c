//! Text statistics: character, word, sentence and paragraph counts, reading
//! time, average word length and longest word for any block of text.
//!
//! The metrics engine lives in [`core::features::text_analyser_logic`]; the
//! action layer, settings and the command-line front end are built around it.

pub mod shared;
pub mod api;
pub mod core;
pub mod config;
pub mod cli;

pub use crate::core::features::text_analyser_logic::{analyze, details, Analyzer, ReadingTime};
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::types::{StatisticsResult, TextDetails};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the command line, returning the process exit code
pub async fn run(cli: cli::Cli) -> std::process::ExitCode {
    match cli::execute(cli).await {
        Ok(output) => {
            print!("{}", output);
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
