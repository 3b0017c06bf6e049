//! User lookup service - prints accounts whose email matches a substring.

use std::io::Write;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Runs the email substring lookup and renders the report.
pub struct UserLookup {
    user_repo: Arc<dyn UserRepository>,
}

impl UserLookup {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Reject patterns that would match every row.
    pub fn validate_pattern(pattern: &str) -> AppResult<()> {
        if pattern.trim().is_empty() {
            return Err(AppError::validation("email pattern must not be empty"));
        }
        Ok(())
    }

    /// Write one report line per matching user to `out`.
    ///
    /// Rows are fetched eagerly and written in the order the database
    /// returned them. Returns the number of lines written.
    pub async fn report<W: Write>(&self, pattern: &str, out: &mut W) -> AppResult<usize> {
        Self::validate_pattern(pattern)?;

        let users = self.user_repo.find_by_email_containing(pattern).await?;

        for user in &users {
            writeln!(out, "{}", user)?;
        }
        out.flush()?;

        Ok(users.len())
    }
}
