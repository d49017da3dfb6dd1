use serde::Deserialize;

/// Origin-relative path of the login endpoint.
pub const LOGIN_PATH: &str = "/login";

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// JSON body returned by the login endpoint. Only `message` is read; any
/// other fields (e.g. `status`) are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoginReplyBody {
    pub message: String,
}

/// A decoded login response: the HTTP status plus the server's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginReply {
    pub status: u16,
    pub message: String,
}

impl LoginReply {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn from_body(status: u16, body: LoginReplyBody) -> Self {
        Self::new(status, body.message)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
