//! User domain entity.

use std::fmt;

use crate::config::{FIELD_EMAIL, FIELD_ID, FIELD_USER};

/// User account as observed in the `users` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: i32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Renders the report line: `ID=<id>, user=<username>, email=<email>`
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}, {}={}, {}={}",
            FIELD_ID, self.id, FIELD_USER, self.username, FIELD_EMAIL, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_format() {
        let user = User::new(1, "bastianfarran", "bastianfarran@example.com");

        assert_eq!(
            user.to_string(),
            "ID=1, user=bastianfarran, email=bastianfarran@example.com"
        );
    }

    #[test]
    fn test_values_are_not_quoted_or_escaped() {
        let user = User::new(-7, "a, b", "x=y@example.com");

        assert_eq!(user.to_string(), "ID=-7, user=a, b, email=x=y@example.com");
    }
}
