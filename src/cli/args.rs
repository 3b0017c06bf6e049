//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_EMAIL_PATTERN;

/// Print user accounts whose email contains a given substring
#[derive(Parser, Debug)]
#[command(name = "user-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging, including SQL statements
    #[arg(short, long)]
    pub verbose: bool,

    /// Environment file to load instead of ./.env
    #[arg(long, env = "ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(flatten)]
    pub check: CheckArgs,
}

/// Arguments for the lookup
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Email substring to match
    #[arg(short, long, default_value = DEFAULT_EMAIL_PATTERN)]
    pub pattern: String,
}
