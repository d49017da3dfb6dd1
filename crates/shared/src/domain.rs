use std::fmt;

use crate::error::ValidationError;

/// Matches what a browser strips with `String.prototype.trim`: Unicode
/// `White_Space` plus the byte-order mark, minus NEL (U+0085), which
/// ECMAScript treats as neither whitespace nor a line terminator.
fn is_trim_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(is_trim_whitespace)
}

/// A validated username/password pair for a single submission attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Trims both raw input values and rejects the pair if either ends up empty.
    pub fn from_input(username: &str, password: &str) -> Result<Self, ValidationError> {
        let username = trim_input(username);
        let password = trim_input(password);

        if username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Form fields in wire order: `username` first, then `password`.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
