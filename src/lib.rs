//! User Check - diagnostic lookup of user accounts
//!
//! Opens one database session, selects every row of `users` whose email
//! contains a substring, prints `ID=<id>, user=<username>, email=<email>`
//! per row, and closes the session.
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: The check command
//! - **config**: Environment configuration and constants
//! - **domain**: The user record
//! - **services**: Lookup and report rendering
//! - **infra**: Database session and repository
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Look up the built-in pattern
//! cargo run
//!
//! # Look up another pattern with SQL logging
//! cargo run -- -v --pattern example.org
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::User;
pub use errors::{AppError, AppResult};
