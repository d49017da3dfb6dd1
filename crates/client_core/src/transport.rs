//! HTTP side of the login form: posts credentials and decodes the server's reply.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    protocol::{LoginReplyBody, LOGIN_PATH},
    Credentials, LoginReply,
};
use tracing::debug;
use url::Url;

use crate::error::ClientError;

/// Submits one login attempt. Any HTTP status is a successful submission;
/// only transport and decode failures are errors.
#[async_trait]
pub trait LoginClient: Send + Sync {
    async fn submit(&self, credentials: &Credentials) -> Result<LoginReply, ClientError>;
}

pub struct HttpLoginClient {
    http: Client,
    login_url: Url,
}

impl HttpLoginClient {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        Self::with_http(server_url, Client::new())
    }

    pub fn with_http(server_url: &str, http: Client) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            login_url: resolve_login_url(server_url)?,
        })
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }
}

/// Resolves the login endpoint against `server_url` the way a page resolves
/// `fetch("/login")`: origin-relative, so any path on the base is dropped.
fn resolve_login_url(server_url: &str) -> Result<Url, ClientError> {
    let invalid = |source: url::ParseError| ClientError::InvalidBaseUrl {
        url: server_url.to_string(),
        source,
    };
    let base = Url::parse(server_url.trim()).map_err(invalid)?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(ClientError::UnsupportedScheme {
            url: server_url.to_string(),
        });
    }
    base.join(LOGIN_PATH).map_err(invalid)
}

#[async_trait]
impl LoginClient for HttpLoginClient {
    async fn submit(&self, credentials: &Credentials) -> Result<LoginReply, ClientError> {
        debug!(
            url = %self.login_url,
            username = credentials.username(),
            "posting login form"
        );
        let fields = credentials.form_fields();
        let res = self
            .http
            .post(self.login_url.clone())
            .form(fields.as_slice())
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = res.status().as_u16();
        let bytes = res.bytes().await.map_err(ClientError::Transport)?;
        let body: LoginReplyBody = serde_json::from_slice(&bytes)
            .map_err(|source| ClientError::Decode { status, source })?;
        debug!(status, "login reply decoded");

        Ok(LoginReply::from_body(status, body))
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
