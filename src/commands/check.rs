//! Check command - prints users whose email contains the pattern.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in pattern, connection from .env / DATABASE_URL
//! cargo run
//!
//! # Other pattern and env file
//! cargo run -- --pattern example.org --env-file .env.production
//! ```

use std::io::Write;
use std::sync::Arc;

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, UserStore};
use crate::services::UserLookup;

/// Execute the check command, writing the report to stdout
pub async fn execute(args: CheckArgs, config: Config) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &args.pattern, &mut out).await?;
    Ok(())
}

/// Open a session, run the lookup into `out`, and release the session.
pub async fn run<W: Write>(config: &Config, pattern: &str, out: &mut W) -> AppResult<usize> {
    UserLookup::validate_pattern(pattern)?;

    tracing::debug!(pattern, "Connecting to database...");
    let db = Database::connect(config).await?;

    run_session(db, pattern, out).await
}

/// Run the lookup on an open session, then close it.
///
/// The session is closed whether or not the lookup succeeded; the
/// lookup's error wins over a close error.
pub async fn run_session<W: Write>(db: Database, pattern: &str, out: &mut W) -> AppResult<usize> {
    let lookup = UserLookup::new(Arc::new(UserStore::new(db.connection())));
    let result = lookup.report(pattern, out).await;
    drop(lookup);

    let closed = db.close().await;

    let count = result?;
    closed?;

    tracing::debug!(rows = count, "Check finished");
    Ok(count)
}
