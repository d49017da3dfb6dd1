use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("unsupported scheme in server url {url:?}; expected http or https")]
    UnsupportedScheme { url: String },
    #[error("login request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("login response (status {status}) is not a JSON object with a message: {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },
}
