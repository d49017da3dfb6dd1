use thiserror::Error;

use crate::protocol::MISSING_FIELDS_MESSAGE;

/// Local form validation failure. Every variant renders the same inline
/// message; the variant only records which input was blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{msg}", msg = MISSING_FIELDS_MESSAGE)]
    EmptyUsername,
    #[error("{msg}", msg = MISSING_FIELDS_MESSAGE)]
    EmptyPassword,
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "username",
            Self::EmptyPassword => "password",
        }
    }
}
