//! Login form controller: validate, submit, render.

use std::sync::Arc;

use shared::{protocol::SERVER_ERROR_MESSAGE, Credentials, ValidationError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{transport::LoginClient, view::FormView};

/// What a single submission attempt rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A field was blank after trimming; no request was sent.
    Incomplete(ValidationError),
    /// 2xx reply; its message was alerted.
    Accepted { message: String },
    /// Non-2xx reply; its message was shown inline.
    Denied { status: u16, message: String },
    /// Transport or decode failure.
    ServerError,
}

impl LoginOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The text this outcome puts in front of the user.
    pub fn message(&self) -> String {
        match self {
            Self::Incomplete(err) => err.to_string(),
            Self::Accepted { message } | Self::Denied { message, .. } => message.clone(),
            Self::ServerError => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Binds a [`FormView`] to a [`LoginClient`]. Clones share the same view and
/// client, so every click renders into the same form.
pub struct LoginForm<V, C> {
    view: Arc<V>,
    client: Arc<C>,
}

impl<V, C> Clone for LoginForm<V, C> {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            client: Arc::clone(&self.client),
        }
    }
}

impl<V, C> LoginForm<V, C>
where
    V: FormView + 'static,
    C: LoginClient + 'static,
{
    pub fn new(view: Arc<V>, client: Arc<C>) -> Self {
        Self { view, client }
    }

    /// Handles one press of the login button. The attempt runs as its own
    /// task; earlier attempts still in flight are neither cancelled nor
    /// awaited, so whichever resolves last owns the final view state.
    pub fn click(&self) -> JoinHandle<LoginOutcome> {
        let form = self.clone();
        tokio::spawn(async move { form.submit().await })
    }

    /// Runs one attempt inline and renders its outcome.
    pub async fn submit(&self) -> LoginOutcome {
        let outcome = self.attempt().await;
        render(self.view.as_ref(), &outcome).await;
        outcome
    }

    async fn attempt(&self) -> LoginOutcome {
        let username = self.view.username().await;
        let password = self.view.password().await;

        let credentials = match Credentials::from_input(&username, &password) {
            Ok(credentials) => credentials,
            Err(err) => {
                debug!(field = err.field(), "login form incomplete");
                return LoginOutcome::Incomplete(err);
            }
        };

        match self.client.submit(&credentials).await {
            Ok(reply) if reply.is_success() => {
                info!(status = reply.status, username = credentials.username(), "login accepted");
                LoginOutcome::Accepted {
                    message: reply.message,
                }
            }
            Ok(reply) => {
                info!(status = reply.status, username = credentials.username(), "login denied");
                LoginOutcome::Denied {
                    status: reply.status,
                    message: reply.message,
                }
            }
            Err(error) => {
                warn!(%error, "login request failed");
                LoginOutcome::ServerError
            }
        }
    }
}

/// Applies an outcome to the form. On success the alert is raised before the
/// error element is hidden.
pub async fn render<V: FormView>(view: &V, outcome: &LoginOutcome) {
    match outcome {
        LoginOutcome::Accepted { message } => {
            view.alert(message).await;
            view.hide_error().await;
        }
        LoginOutcome::Incomplete(_) | LoginOutcome::Denied { .. } | LoginOutcome::ServerError => {
            view.show_error(&outcome.message()).await;
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
