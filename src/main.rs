//! User Check - Application entry point

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_check::{
    cli::Cli,
    commands,
    config::{Config, DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER},
    errors::{AppError, AppResult},
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::debug!(code = e.code(), "Command failed");
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = Config::from_env(cli.env_file.as_deref())?.with_query_logging(cli.verbose);
    tracing::debug!(?config, "Configuration loaded");

    commands::check::execute(cli.check, config).await
}

/// Line printed to stderr when the run fails, independent of log filters
fn failure_message(e: &AppError) -> String {
    format!("Command failed: {}", e)
}

/// Initialize tracing subscriber on stderr; stdout carries only the report
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        VERBOSE_LOG_FILTER.to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_carries_driver_error() {
        let err = AppError::from(sea_orm::DbErr::Custom("password authentication failed".into()));

        let message = failure_message(&err);
        assert!(message.starts_with("Command failed: Database error:"));
        assert!(message.contains("password authentication failed"));
    }
}
