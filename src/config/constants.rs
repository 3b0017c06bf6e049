//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Lookup
// =============================================================================

/// Email substring searched for when no `--pattern` is given
pub const DEFAULT_EMAIL_PATTERN: &str = "bastianfarran";

/// Output line prefix for the user id
pub const FIELD_ID: &str = "ID";

/// Output line prefix for the username
pub const FIELD_USER: &str = "user";

/// Output line prefix for the email address
pub const FIELD_EMAIL: &str = "email";

// =============================================================================
// Database
// =============================================================================

/// Full connection string; wins over the component variables below
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_NAME: &str = "DB_NAME";

/// Default PostgreSQL port used when `DB_PORT` is unset
pub const DEFAULT_DB_PORT: u16 = 5432;

/// One session per run
pub const MAX_DB_CONNECTIONS: u32 = 1;

// =============================================================================
// Logging
// =============================================================================

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Filter forced by `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";
